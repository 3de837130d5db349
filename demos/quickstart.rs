use chrono::{FixedOffset, Utc};
use daybreak::{CalendarDay, Coordinate, Location, SolarEvent};

fn main() {
    // New York City, Eastern Daylight Time.
    let location = Location::new(
        FixedOffset::west_opt(4 * 3600).unwrap(),
        Coordinate::new(40.642, -74.017),
    );

    let today = CalendarDay::from_instant(Utc::now(), &location.time_zone);
    let events = [
        SolarEvent::CivilDawn,
        SolarEvent::Sunrise,
        SolarEvent::SolarNoon,
        SolarEvent::Sunset,
        SolarEvent::CivilDusk,
    ];

    println!("{today} in New York:");
    for event in events {
        match today.time_of(event, &location) {
            Ok(instant) => println!("  {event}: {instant}"),
            Err(err) => println!("  {event}: {err}"),
        }
    }

    match location.time_of_next(SolarEvent::Sunrise, Utc::now()) {
        Ok(next) => println!("next sunrise: {next}"),
        Err(err) => println!("next sunrise: {err}"),
    }
}
