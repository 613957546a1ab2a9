//! Fixed hue bucket table
//!
//! Sixteen named hue ranges, each `[min, max)`. "Red" is the only range that
//! crosses 0°, so it is tagged as [`HueSelector::Wrapping`] and matches
//! `h >= min || h < max` instead of `h >= min && h < max`.

/// Membership strategy for a bucket's hue range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSelector {
    /// `min <= h < max`
    Contiguous,
    /// `h >= min || h < max`, for ranges crossing 360°
    Wrapping,
}

/// A named hue range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBucket {
    pub name: &'static str,
    pub min_hue: f32,
    pub max_hue: f32,
    pub selector: HueSelector,
}

impl HueBucket {
    const fn contiguous(name: &'static str, min_hue: f32, max_hue: f32) -> Self {
        Self {
            name,
            min_hue,
            max_hue,
            selector: HueSelector::Contiguous,
        }
    }

    const fn wrapping(name: &'static str, min_hue: f32, max_hue: f32) -> Self {
        Self {
            name,
            min_hue,
            max_hue,
            selector: HueSelector::Wrapping,
        }
    }

    pub fn wraps(&self) -> bool {
        self.selector == HueSelector::Wrapping
    }

    /// Inclusive-min, exclusive-max hue membership
    #[inline]
    pub fn contains_hue(&self, hue: f32) -> bool {
        match self.selector {
            HueSelector::Contiguous => hue >= self.min_hue && hue < self.max_hue,
            HueSelector::Wrapping => hue >= self.min_hue || hue < self.max_hue,
        }
    }

    /// Output file name for this bucket's swatch image
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Bucket table in output order
pub static HUE_BUCKETS: [HueBucket; 16] = [
    HueBucket::wrapping("Red", 355.0, 10.0),
    HueBucket::contiguous("Red-Orange", 10.0, 20.0),
    HueBucket::contiguous("Orange-Brown", 20.0, 40.0),
    HueBucket::contiguous("Orange-Yellow", 40.0, 50.0),
    HueBucket::contiguous("Yellow", 50.0, 60.0),
    HueBucket::contiguous("Yellow-Green", 60.0, 80.0),
    HueBucket::contiguous("Green", 80.0, 140.0),
    HueBucket::contiguous("Green-Cyan", 140.0, 170.0),
    HueBucket::contiguous("Cyan", 170.0, 200.0),
    HueBucket::contiguous("Cyan-Blue", 200.0, 220.0),
    HueBucket::contiguous("Blue", 220.0, 240.0),
    HueBucket::contiguous("Blue-Magenta", 240.0, 280.0),
    HueBucket::contiguous("Magenta", 280.0, 320.0),
    HueBucket::contiguous("Magenta-Pink", 320.0, 330.0),
    HueBucket::contiguous("Pink", 330.0, 345.0),
    HueBucket::contiguous("Pink-Red", 345.0, 355.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn claimants(hue: f32) -> Vec<&'static str> {
        HUE_BUCKETS
            .iter()
            .filter(|bucket| bucket.contains_hue(hue))
            .map(|bucket| bucket.name)
            .collect()
    }

    #[test]
    fn test_boundary_hues_land_in_exactly_one_bucket() {
        let expected = [
            (0.0, "Red"),
            (9.999, "Red"),
            (10.0, "Red-Orange"),
            (19.999, "Red-Orange"),
            (20.0, "Orange-Brown"),
            (354.999, "Pink-Red"),
            (355.0, "Red"),
            (359.999, "Red"),
        ];
        for (hue, name) in expected {
            assert_eq!(claimants(hue), vec![name], "hue {}", hue);
        }
    }

    #[test]
    fn test_partition_is_complete() {
        let mut hue = 0.0_f32;
        while hue < 360.0 {
            assert_eq!(claimants(hue).len(), 1, "hue {}", hue);
            hue += 0.25;
        }
    }

    #[test]
    fn test_contiguous_ranges_chain() {
        // Every non-wrapping bucket starts where the previous one ended
        let mut previous_max = HUE_BUCKETS[0].max_hue;
        for bucket in HUE_BUCKETS.iter().skip(1) {
            assert!(!bucket.wraps());
            assert_eq!(bucket.min_hue, previous_max, "{}", bucket.name);
            previous_max = bucket.max_hue;
        }
        assert_eq!(previous_max, HUE_BUCKETS[0].min_hue);
    }

    #[test]
    fn test_red_wraps() {
        let red = &HUE_BUCKETS[0];
        assert_eq!(red.name, "Red");
        assert!(red.wraps());
        assert!(red.contains_hue(358.0));
        assert!(red.contains_hue(5.0));
        assert!(!red.contains_hue(10.0));
        assert!(!red.contains_hue(354.0));
        assert_eq!(HUE_BUCKETS.iter().filter(|b| b.wraps()).count(), 1);
    }

    #[test]
    fn test_rgb_hues_on_boundaries_start_the_next_bucket() {
        use crate::color::Hsl;

        let expected = [
            ((0xAA, 0xFF, 0x00), "Green"),
            ((0x04, 0x05, 0x02), "Green"),
            ((0x03, 0x04, 0x06), "Blue"),
            ((0x04, 0x02, 0x01), "Orange-Brown"),
            ((0xFF, 0xAA, 0x00), "Orange-Yellow"),
            ((0x00, 0xFF, 0x55), "Green-Cyan"),
            ((0xFF, 0x00, 0xAA), "Magenta-Pink"),
        ];
        for ((r, g, b), name) in expected {
            let hsl = Hsl::from_rgb8(r, g, b);
            assert_eq!(
                claimants(hsl.h),
                vec![name],
                "#{:02X}{:02X}{:02X} hue {}",
                r,
                g,
                b,
                hsl.h
            );
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(claimants(210.0), vec!["Cyan-Blue"]);
        assert_eq!(HUE_BUCKETS[6].file_name(), "Green.png");
        assert_eq!(HUE_BUCKETS[15].file_name(), "Pink-Red.png");
    }
}
