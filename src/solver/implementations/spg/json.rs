use super::*;
use crate::solver::core::traits::Settings;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

impl SpgSettings {
    /// Write the settings to a file in JSON format
    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Read settings from a JSON file.  Missing fields take their default
    /// values, and the result is validated.
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let settings: SpgSettings = serde_json::from_str(&buffer)?;

        settings
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(settings)
    }
}

impl<V> SpgSolution<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Write the solution and solver information to a file in JSON format
    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Read a solution previously written with [`write_to_file`](Self::write_to_file)
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let solution = serde_json::from_str(&buffer)?;
        Ok(solution)
    }
}

#[test]
fn test_json_settings_io() {
    use std::io::{Seek, SeekFrom};

    let settings = SpgSettingsBuilder::default()
        .mem(10)
        .eps3(1e-12)
        .maxfc(5000)
        .build()
        .unwrap();

    let mut file = tempfile::tempfile().unwrap();
    settings.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let settings2 = SpgSettings::read_from_file(&mut file).unwrap();
    assert_eq!(settings, settings2);
}

#[test]
fn test_json_settings_invalid() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"mem": 0}"#).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let err = SpgSettings::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
