use urania::zodiac::{classify, Element, Sign};

#[test]
fn sign_boundaries() {
    assert_eq!(classify(0.0).sign, Sign::Aries);
    assert_eq!(classify(29.999).sign, Sign::Aries);
    assert_eq!(classify(30.0).sign, Sign::Taurus);
    assert_eq!(classify(359.999).sign, Sign::Pisces);
    assert_eq!(classify(360.0).sign, Sign::Aries);
}

#[test]
fn sign_index_matches_floor_of_thirtieths() {
    let mut lon = 0.25;
    while lon < 720.0 {
        let pos = classify(lon);
        let expected = ((lon / 30.0).floor() as usize) % 12;
        assert_eq!(pos.sign.index(), expected, "at longitude {}", lon);
        lon += 13.7;
    }
}

#[test]
fn full_wheel_decan_layout() {
    // Each sign splits into three ten-degree decans
    for (i, sign) in Sign::ALL.iter().enumerate() {
        let base = i as f64 * 30.0;
        assert_eq!(classify(base + 5.0).sign, *sign);
        assert_eq!(classify(base + 5.0).decan, 1);
        assert_eq!(classify(base + 15.0).decan, 2);
        assert_eq!(classify(base + 25.0).decan, 3);
    }
}

#[test]
fn elements_repeat_every_four_signs() {
    for (i, sign) in Sign::ALL.iter().enumerate() {
        let expected = match i % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        };
        assert_eq!(sign.element(), expected);
    }
}

#[test]
fn positions_serialize_with_sign_names() {
    let pos = classify(15.5);
    let json = serde_json::to_string(&pos).unwrap();
    assert!(json.contains("\"Aries\""));
    assert!(json.contains("\"decan\":2"));
}
