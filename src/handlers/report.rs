use std::io::Write;

use crate::entities::city::CityWithDistance;
use crate::error::AppResult;

/// `"{id} {name} {km} km"` with the distance rounded to two decimals
pub fn format_line(result: &CityWithDistance) -> String {
    format!(
        "{} {} {:.2} km",
        result.city.id,
        result.city.name,
        result.distance_metres / 1000.0
    )
}

pub fn write_report<W: Write>(out: &mut W, results: &[CityWithDistance]) -> AppResult<()> {
    for result in results {
        writeln!(out, "{}", format_line(result))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::city;
    use crate::utils::geo::GeoPoint;

    fn result(id: i32, name: &str, distance_metres: f64) -> CityWithDistance {
        CityWithDistance {
            city: city::Model {
                id,
                name: name.to_string(),
                location: GeoPoint::new(0.0, 0.0),
            },
            distance_metres,
        }
    }

    #[test]
    fn test_format_line_rounds_to_kilometres() {
        assert_eq!(format_line(&result(2, "Bath", 155_830.69)), "2 Bath 155.83 km");
        assert_eq!(
            format_line(&result(5, "Edinburgh", 534_339.3)),
            "5 Edinburgh 534.34 km"
        );
        assert_eq!(format_line(&result(4, "Cardiff", 0.0)), "4 Cardiff 0.00 km");
    }

    #[test]
    fn test_write_report_one_line_per_city() {
        let mut out = Vec::new();
        write_report(
            &mut out,
            &[result(2, "Bath", 155_830.69), result(1, "Bristol", 171_008.95)],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 Bath 155.83 km\n1 Bristol 171.01 km\n"
        );
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
