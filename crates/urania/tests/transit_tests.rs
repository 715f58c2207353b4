use urania::angles;
use urania::chart::ChartAngle;
use urania::config::EngineConfig;
use urania::ephemeris::{
    julian_day_from_ymd, Body, EphemerisProvider, GeoLocation, JulianDay, MeeusEphemeris,
};
use urania::error::{AstroError, ErrorKind};
use urania::transits::{month_transits, TransitQuery};
use urania::zodiac::Sign;

/// Body longitude increases linearly, sidereal time is pinned and the
/// obliquity is zero, so every cusp is constant and crossing times have
/// closed forms: the Midheaven sits at the sidereal angle and the
/// Ascendant 90 degrees further along.
struct LinearSky {
    epoch: JulianDay,
    body_at_epoch: f64,
    degrees_per_day: f64,
    sidereal: f64,
}

impl EphemerisProvider for LinearSky {
    fn longitude_of(&self, _body: Body, jd: JulianDay) -> Result<f64, AstroError> {
        Ok(angles::normalize(
            self.body_at_epoch + self.degrees_per_day * (jd - self.epoch),
        ))
    }

    fn obliquity(&self, _jd: JulianDay) -> f64 {
        0.0
    }

    fn sidereal_time(&self, _jd: JulianDay, _geo_longitude: f64) -> f64 {
        self.sidereal
    }
}

fn march_2025_query(step_minutes: u32) -> TransitQuery {
    TransitQuery {
        year: 2025,
        month: 3,
        location: GeoLocation::new(45.0, 7.0),
        body: Body::Moon,
        utc_offset_hours: 0.0,
        step_minutes,
    }
}

fn linear_sky() -> LinearSky {
    LinearSky {
        epoch: julian_day_from_ymd(2025, 3, 1).unwrap(),
        body_at_epoch: 95.0,
        degrees_per_day: 13.2,
        sidereal: 100.0,
    }
}

#[test]
fn crossings_match_the_analytic_times() {
    let provider = linear_sky();
    let config = EngineConfig::default();
    let events = month_transits(&provider, &march_2025_query(15), &config).unwrap();

    // Cusps sit at MC 100, Asc 190, IC 280, Dsc 10; the body starts at
    // 95 and gains 13.2 degrees per day.
    let expected = [
        (ChartAngle::Midheaven, 5.0 / 13.2),
        (ChartAngle::Ascendant, 95.0 / 13.2),
        (ChartAngle::ImumCoeli, 185.0 / 13.2),
        (ChartAngle::Descendant, 275.0 / 13.2),
        (ChartAngle::Midheaven, 365.0 / 13.2),
    ];
    assert_eq!(events.len(), expected.len());

    let tolerance_days = 30.0 / 86_400.0;
    for (event, (angle, offset_days)) in events.iter().zip(expected) {
        assert_eq!(event.angle, angle);
        assert!(
            (event.julian_day - (provider.epoch + offset_days)).abs() <= tolerance_days,
            "{} event off by {} days",
            angle,
            event.julian_day - (provider.epoch + offset_days)
        );
    }
}

#[test]
fn events_carry_classified_positions() {
    let provider = linear_sky();
    let config = EngineConfig::default();
    let events = month_transits(&provider, &march_2025_query(15), &config).unwrap();

    let first = &events[0];
    // At the Midheaven crossing the body stands at the cusp, 100
    // degrees: ten degrees into Cancer, second decan.
    assert!((first.position.longitude - 100.0).abs() < 0.01);
    assert_eq!(first.position.sign, Sign::Cancer);
    assert_eq!(first.position.decan, 2);
    assert_eq!(first.body, Body::Moon);
}

#[test]
fn runs_are_deterministic() {
    let provider = linear_sky();
    let config = EngineConfig::default();
    let query = march_2025_query(15);
    let first = month_transits(&provider, &query, &config).unwrap();
    let second = month_transits(&provider, &query, &config).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn opposition_passes_do_not_fabricate_events() {
    // A coarser scan still finds exactly the five genuine crossings:
    // the signed difference jumping across the 180-degree antipode of
    // each cusp must not bracket.
    let provider = linear_sky();
    let config = EngineConfig::default();
    let events = month_transits(&provider, &march_2025_query(60), &config).unwrap();
    assert_eq!(events.len(), 5);
}

#[test]
fn local_offset_shifts_the_reported_clock() {
    let provider = linear_sky();
    let config = EngineConfig::default();
    let mut query = march_2025_query(15);
    query.utc_offset_hours = 2.0;
    let events = month_transits(&provider, &query, &config).unwrap();
    assert_eq!(events.len(), 5);
    for event in &events {
        assert_eq!(event.datetime_local.offset().local_minus_utc(), 7200);
        assert_eq!(
            event.datetime_local.timestamp(),
            event.datetime_utc.timestamp()
        );
    }
}

#[test]
fn step_bounds_are_enforced() {
    let provider = linear_sky();
    let config = EngineConfig::default();
    for step in [0, 61] {
        let err = month_transits(&provider, &march_2025_query(step), &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

/// A provider that fails mid-month: the whole search must abort.
struct FailingSky {
    inner: LinearSky,
    fail_after: JulianDay,
}

impl EphemerisProvider for FailingSky {
    fn longitude_of(&self, body: Body, jd: JulianDay) -> Result<f64, AstroError> {
        if jd > self.fail_after {
            return Err(AstroError::Ephemeris {
                body: body.name().to_string(),
                julian_day: jd,
                message: "series evaluation failed".to_string(),
            });
        }
        self.inner.longitude_of(body, jd)
    }

    fn obliquity(&self, jd: JulianDay) -> f64 {
        self.inner.obliquity(jd)
    }

    fn sidereal_time(&self, jd: JulianDay, geo_longitude: f64) -> f64 {
        self.inner.sidereal_time(jd, geo_longitude)
    }
}

#[test]
fn provider_failure_aborts_the_month() {
    let inner = linear_sky();
    let fail_after = inner.epoch + 10.0;
    let provider = FailingSky { inner, fail_after };
    let config = EngineConfig::default();
    let err = month_transits(&provider, &march_2025_query(15), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Computation);
}

#[test]
fn sun_crosses_each_cusp_daily() {
    let provider = MeeusEphemeris::new();
    let config = EngineConfig::default();
    let query = TransitQuery {
        year: 2025,
        month: 10,
        location: GeoLocation::new(41.9028, 12.4964),
        body: Body::Sun,
        utc_offset_hours: 2.0,
        step_minutes: 60,
    };
    let events = month_transits(&provider, &query, &config).unwrap();

    // One pass over each of the four cusps per day, 31 days
    assert!(
        (118..=130).contains(&events.len()),
        "unexpected event count {}",
        events.len()
    );
    for pair in events.windows(2) {
        assert!(pair[0].julian_day <= pair[1].julian_day);
    }
    for event in &events {
        assert_eq!(event.body, Body::Sun);
        assert!((0.0..360.0).contains(&event.position.longitude));
    }
}

#[test]
fn moon_transits_are_frequent() {
    let provider = MeeusEphemeris::new();
    let config = EngineConfig::default();
    let query = TransitQuery {
        year: 2025,
        month: 10,
        location: GeoLocation::new(41.9028, 12.4964),
        body: Body::Moon,
        utc_offset_hours: 2.0,
        step_minutes: 60,
    };
    let events = month_transits(&provider, &query, &config).unwrap();
    assert!(events.len() > 50, "only {} events", events.len());
}
