use crate::error::{FieldOpsError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Corn,
    Soybeans,
    Rice,
    Barley,
    Oats,
}

impl Crop {
    pub const ALL: [Crop; 6] = [
        Crop::Wheat,
        Crop::Corn,
        Crop::Soybeans,
        Crop::Rice,
        Crop::Barley,
        Crop::Oats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Soybeans => "Soybeans",
            Crop::Rice => "Rice",
            Crop::Barley => "Barley",
            Crop::Oats => "Oats",
        }
    }

    /// Reference yield in tons per acre under optimal conditions.
    pub fn base_yield(&self) -> f64 {
        match self {
            Crop::Wheat => 4.5,
            Crop::Corn => 9.2,
            Crop::Soybeans => 3.3,
            Crop::Rice => 7.8,
            Crop::Barley => 3.8,
            Crop::Oats => 2.9,
        }
    }

    pub fn is_paddy(&self) -> bool {
        matches!(self, Crop::Rice)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Some(Crop::Wheat),
            "corn" => Some(Crop::Corn),
            "soybeans" => Some(Crop::Soybeans),
            "rice" => Some(Crop::Rice),
            "barley" => Some(Crop::Barley),
            "oats" => Some(Crop::Oats),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub name: String,
    pub location: String,
    pub size_acres: f64,
    crops: Vec<Crop>,
}

impl FarmProfile {
    pub fn new(name: impl Into<String>, location: impl Into<String>, size_acres: f64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            size_acres,
            crops: Vec::new(),
        }
    }

    pub fn with_crops(mut self, crops: impl IntoIterator<Item = Crop>) -> Self {
        for crop in crops {
            self.add_crop(crop);
        }
        self
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn grows(&self, crop: Crop) -> bool {
        self.crops.contains(&crop)
    }

    /// Appends the crop unless already present. Returns true if it was added.
    pub fn add_crop(&mut self, crop: Crop) -> bool {
        if self.grows(crop) {
            return false;
        }
        self.crops.push(crop);
        true
    }

    pub fn remove_crop(&mut self, crop: Crop) -> bool {
        let before = self.crops.len();
        self.crops.retain(|c| *c != crop);
        self.crops.len() != before
    }

    pub fn toggle_crop(&mut self, crop: Crop) {
        if !self.remove_crop(crop) {
            self.crops.push(crop);
        }
    }

    pub fn set_size(&mut self, value: &str) -> Result<()> {
        let size: f64 = value
            .trim()
            .parse()
            .map_err(|_| FieldOpsError::InvalidData(format!("'{}' is not a number", value)))?;
        if !size.is_finite() || size <= 0.0 {
            return Err(FieldOpsError::InvalidData(format!(
                "farm size must be positive, got {}",
                size
            )));
        }
        self.size_acres = size;
        Ok(())
    }

    pub fn crop_list(&self) -> String {
        if self.crops.is_empty() {
            return "None".to_string();
        }
        self.crops
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for FarmProfile {
    fn default() -> Self {
        Self::new("Green Valley Farm", "California, USA", 150.0).with_crops([
            Crop::Wheat,
            Crop::Corn,
            Crop::Soybeans,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_from_str_valid() {
        assert_eq!(Crop::from_str("Wheat"), Some(Crop::Wheat));
        assert_eq!(Crop::from_str("RICE"), Some(Crop::Rice));
        assert_eq!(Crop::from_str(" soybeans "), Some(Crop::Soybeans));
    }

    #[test]
    fn crop_from_str_invalid() {
        assert_eq!(Crop::from_str("Sorghum"), None);
        assert_eq!(Crop::from_str(""), None);
        assert_eq!(Crop::from_str("maize"), None);
        assert_eq!(Crop::from_str("oat"), None);
    }

    #[test]
    fn crop_round_trip() {
        for crop in Crop::ALL {
            assert_eq!(
                Crop::from_str(crop.as_str()),
                Some(crop),
                "Round-trip failed for {:?}",
                crop
            );
        }
    }

    #[test]
    fn base_yields() {
        assert_eq!(Crop::Wheat.base_yield(), 4.5);
        assert_eq!(Crop::Corn.base_yield(), 9.2);
        assert_eq!(Crop::Oats.base_yield(), 2.9);
        assert!(Crop::Rice.is_paddy());
        assert!(!Crop::Barley.is_paddy());
    }

    #[test]
    fn crops_keep_insertion_order_without_duplicates() {
        let mut farm = FarmProfile::new("Test", "Nowhere", 10.0)
            .with_crops([Crop::Oats, Crop::Wheat, Crop::Oats]);
        assert_eq!(farm.crops(), &[Crop::Oats, Crop::Wheat]);

        assert!(!farm.add_crop(Crop::Wheat));
        assert!(farm.add_crop(Crop::Rice));
        assert_eq!(farm.crops(), &[Crop::Oats, Crop::Wheat, Crop::Rice]);
    }

    #[test]
    fn toggle_crop_removes_then_appends() {
        let mut farm = FarmProfile::default();
        farm.toggle_crop(Crop::Corn);
        assert_eq!(farm.crops(), &[Crop::Wheat, Crop::Soybeans]);
        farm.toggle_crop(Crop::Corn);
        assert_eq!(farm.crops(), &[Crop::Wheat, Crop::Soybeans, Crop::Corn]);
    }

    #[test]
    fn set_size_rejects_non_positive() {
        let mut farm = FarmProfile::default();
        assert!(farm.set_size("0").is_err());
        assert!(farm.set_size("-3").is_err());
        assert!(farm.set_size("abc").is_err());
        assert_eq!(farm.size_acres, 150.0);

        farm.set_size(" 42.5 ").unwrap();
        assert_eq!(farm.size_acres, 42.5);
    }

    #[test]
    fn crop_list_display() {
        assert_eq!(FarmProfile::default().crop_list(), "Wheat, Corn, Soybeans");
        assert_eq!(FarmProfile::new("a", "b", 1.0).crop_list(), "None");
    }
}
