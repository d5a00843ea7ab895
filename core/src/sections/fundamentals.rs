use guide_common::output::Console;
use tracing::trace;

pub const LANGUAGE: &str = "Java";

/// Lossless conversion. Every `i32` fits in an `f64`.
pub fn widen(value: i32) -> f64 {
    f64::from(value)
}

/// Whether a whole number survives a round trip through `i32`.
pub fn fits_in_i32(value: i64) -> bool {
    i32::try_from(value).is_ok()
}

/// Lossy conversion. Drops the fractional part, rounding toward zero.
pub fn narrow(value: f64) -> i32 {
    value as i32
}

pub fn run(out: &mut dyn Console) {
    let year: i32 = 2025;
    let population: i64 = 8_000_000_000;
    let price: f64 = 55999.99;
    let is_complete: bool = true;

    trace!(
        population,
        fits_in_i32 = fits_in_i32(population),
        max_i32 = i32::MAX,
        "population held as i64"
    );
    out.text(&format!("Current Year: {year}, Price: ${price}"));

    let message: String = format!("Welcome to the {LANGUAGE} guide!");
    out.text(&format!("{message} - Complete Status: {is_complete}"));

    let wide_year: f64 = widen(year);
    out.text(&format!("Widening Cast (int to double): {wide_year:?}"));

    let narrow_price: i32 = narrow(price);
    out.text(&format!("Narrowing Cast (double to int): {narrow_price}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_common::output::Transcript;

    #[test]
    fn casts() {
        assert_eq!(widen(2025), 2025.0);
        assert_eq!(narrow(55999.99), 55999);
        assert_eq!(narrow(-3.9), -3);
    }

    #[test]
    fn population_needs_a_wide_integer() {
        assert!(!fits_in_i32(8_000_000_000));
        assert!(fits_in_i32(i64::from(i32::MAX)));
        assert!(!fits_in_i32(i64::from(i32::MAX) + 1));
        assert!(fits_in_i32(i64::from(i32::MIN)));
    }

    #[test]
    fn prints_values_and_casts() {
        let mut out = Transcript::new();
        run(&mut out);
        assert_eq!(
            out.texts(),
            vec![
                "Current Year: 2025, Price: $55999.99",
                "Welcome to the Java guide! - Complete Status: true",
                "Widening Cast (int to double): 2025.0",
                "Narrowing Cast (double to int): 55999",
            ]
        );
    }
}
