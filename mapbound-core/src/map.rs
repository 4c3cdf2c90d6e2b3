use crate::bounds::{Bounds, DEFAULT_MAX_X, DEFAULT_MAX_Z, default_max_x, default_max_z};
use crate::coordinates::Position;
use crate::error::MapError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Map metadata that carries the world footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapHeader {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_x")]
    pub max_x: f32,
    #[serde(default = "default_max_z")]
    pub max_z: f32,
}

impl MapHeader {
    pub fn new(name: impl Into<String>, max_x: f32, max_z: f32) -> Self {
        Self {
            name: Some(name.into()),
            max_x,
            max_z,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let header: Self = read_json(path)?;
        debug!(
            path = %path.display(),
            name = header.name.as_deref().unwrap_or("<unnamed>"),
            max_x = header.max_x,
            max_z = header.max_z,
            "loaded map header"
        );
        Ok(header)
    }

    /// Bounds described by this header. Negative or non-finite extents are
    /// rejected here even though `Bounds::new` accepts them.
    pub fn bounds(&self) -> Result<Bounds, MapError> {
        let max_x = validate_extent("x", self.max_x)?;
        let max_z = validate_extent("z", self.max_z)?;
        Ok(Bounds::new(max_x, max_z))
    }
}

impl Default for MapHeader {
    fn default() -> Self {
        Self {
            name: None,
            max_x: DEFAULT_MAX_X,
            max_z: DEFAULT_MAX_Z,
        }
    }
}

/// Reads a JSON array of positions. Errors name the offending file.
pub fn load_positions(path: impl AsRef<Path>) -> Result<Vec<Position>, MapError> {
    let path = path.as_ref();
    let positions: Vec<Position> = read_json(path)?;
    debug!(path = %path.display(), count = positions.len(), "loaded positions");
    Ok(positions)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MapError> {
    let json = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| MapError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_extent(axis: &'static str, value: f32) -> Result<f32, MapError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MapError::InvalidBound { axis, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_header() {
        let header =
            MapHeader::from_json_str(r#"{ "name": "arena", "max_x": 1024.0, "max_z": 512.0 }"#)
                .unwrap();
        assert_eq!(header, MapHeader::new("arena", 1024.0, 512.0));
        assert_eq!(header.bounds().unwrap(), Bounds::new(1024.0, 512.0));
    }

    #[test]
    fn empty_header_uses_defaults() {
        let header = MapHeader::from_json_str("{}").unwrap();
        assert_eq!(header, MapHeader::default());
        assert_eq!(header.bounds().unwrap(), Bounds::default());
    }

    #[test]
    fn zero_extent_is_allowed() {
        let header = MapHeader::from_json_str(r#"{ "max_x": 0.0 }"#).unwrap();
        assert_eq!(header.bounds().unwrap(), Bounds::new(0.0, DEFAULT_MAX_Z));
    }

    #[test]
    fn rejects_negative_extent() {
        let header = MapHeader::from_json_str(r#"{ "max_z": -1.0 }"#).unwrap();
        assert!(matches!(
            header.bounds(),
            Err(MapError::InvalidBound { axis: "z", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_extent() {
        let header = MapHeader {
            max_x: f32::INFINITY,
            ..MapHeader::default()
        };
        assert!(matches!(
            header.bounds(),
            Err(MapError::InvalidBound { axis: "x", .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            MapHeader::from_json_str(r#"{ "max_x": "wide" }"#),
            Err(MapError::Parse(_))
        ));
    }

    #[test]
    fn loads_header_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, r#"{ "name": "cave", "max_x": 256.0 }"#).unwrap();

        let header = MapHeader::load(&path).unwrap();
        assert_eq!(header.name.as_deref(), Some("cave"));
        assert_eq!(header.bounds().unwrap(), Bounds::new(256.0, DEFAULT_MAX_Z));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match MapHeader::load(&path) {
            Err(MapError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_header_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, r#"{ "max_x": "#).unwrap();

        let err = MapHeader::load(&path).unwrap_err();
        assert!(matches!(&err, MapError::ParseFile { path: reported, .. } if *reported == path));
        assert!(err.to_string().contains("map.json"));
    }

    #[test]
    fn loads_positions_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        std::fs::write(
            &path,
            r#"[{ "x": 1.0, "y": 2.0, "z": 3.0 }, { "x": -4.0, "y": 0.0, "z": 5000.0 }]"#,
        )
        .unwrap();

        let positions = load_positions(&path).unwrap();
        assert_eq!(
            positions,
            vec![Position::from([1.0, 2.0, 3.0]), Position::new(-4.0, 0.0, 5000.0)]
        );
    }

    #[test]
    fn missing_positions_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_positions(&path).unwrap_err();
        assert!(matches!(&err, MapError::Io { path: reported, .. } if *reported == path));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_positions_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.json");
        std::fs::write(&path, r#"[{ "x": 1.0 }]"#).unwrap();

        let err = load_positions(&path).unwrap_err();
        assert!(matches!(&err, MapError::ParseFile { path: reported, .. } if *reported == path));
        assert!(err.to_string().contains("positions.json"));
    }
}
