use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two Riyadh metro stations, as exported from a mapping application.
pub const STATIONS_KML: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark><name>Al Murooj (المروج)</name><description>Route Color: #00ade5
Hub: No
Park &amp; Ride: No
</description><Point><coordinates>46.6544534448838,24.7545287735283,0</coordinates></Point></Placemark><Placemark><name>King Fahad District (حي الملك فهد)</name><description>Route Color: #00ade5
Hub: No
Park &amp; Ride: No
</description><Point><coordinates>46.6613212,24.7381012,0</coordinates></Point></Placemark></Document></kml>"#;

pub const STATION_NAMES: [&str; 2] = ["Al Murooj (المروج)", "King Fahad District (حي الملك فهد)"];

/// Unclosed `<name>` element.
pub const MALFORMED_KML: &str =
    r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark><name>Broken</Placemark></Document></kml>"#;

/// A temporary workspace holding one input document.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn with_input(contents: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let input = dir.path().join("stations.kml");
        let output = dir.path().join("extracted.txt");
        fs::write(&input, contents)?;
        Ok(Self { dir, input, output })
    }

    pub fn read_output(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.output)
    }
}
