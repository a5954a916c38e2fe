use pokedex_types::{Height, Weight};

pub const FEET_PER_METER: f64 = 3.28084;
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Convert decimeters into meters plus truncated feet and inches.
pub fn height_from_decimeters(decimeters: u32) -> Height {
    let meters = f64::from(decimeters) / 10.0;
    let total_feet = meters * FEET_PER_METER;
    let feet = total_feet.floor();
    let inches = ((total_feet - feet) * 12.0).floor();

    Height {
        meters,
        feet: feet as u32,
        inches: inches as u32,
    }
}

/// Convert hectograms into kilograms and pounds.
pub fn weight_from_hectograms(hectograms: u32) -> Weight {
    let kilograms = f64::from(hectograms) / 10.0;
    Weight {
        kilograms,
        pounds: kilograms * POUNDS_PER_KILOGRAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_17_decimeters() {
        let height = height_from_decimeters(17);
        assert_eq!(height.meters, 1.7);
        assert_eq!(height.feet, 5);
        assert_eq!(height.inches, 6);
    }

    #[test]
    fn test_height_4_decimeters() {
        let height = height_from_decimeters(4);
        assert_eq!(height.meters, 0.4);
        assert_eq!(height.feet, 1);
        assert_eq!(height.inches, 3);
    }

    #[test]
    fn test_height_zero() {
        let height = height_from_decimeters(0);
        assert_eq!((height.feet, height.inches), (0, 0));
    }

    #[test]
    fn test_inches_never_reach_twelve() {
        for dm in 0..2000 {
            assert!(height_from_decimeters(dm).inches < 12, "dm = {}", dm);
        }
    }

    #[test]
    fn test_weight_60_hectograms() {
        let weight = weight_from_hectograms(60);
        assert_eq!(weight.kilograms, 6.0);
        assert!((weight.pounds - 13.22772).abs() < 1e-9);
    }
}
