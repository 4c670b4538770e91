//! Shared fixtures for file driver tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Header line of the data files
pub const HEADER: &str = "Year,Month,DayofMonth,DayOfWeek,DepTime,CRSDepTime,ArrTime,CRSArrTime,UniqueCarrier,FlightNum,TailNum,ActualElapsedTime,CRSElapsedTime,AirTime,ArrDelay,DepDelay,Origin,Dest,Distance,TaxiIn,TaxiOut,Cancelled,CancellationCode,Diverted,CarrierDelay,WeatherDelay,NASDelay,SecurityDelay,LateAircraftDelay";

/// First data row of the 1987 file
pub const ROW_1987: &str =
    "1987,10,14,3,741,730,912,849,PS,1451,NA,91,79,NA,23,11,SAN,SFO,447,NA,NA,0,NA,0,NA,NA,NA,NA,NA";

/// Same row with a departure time that is not a number
pub const ROW_BAD_DEP_TIME: &str =
    "1987,10,15,4,7x9,730,903,849,PS,1451,NA,94,79,NA,14,-1,SAN,SFO,447,NA,NA,0,NA,0,NA,NA,NA,NA,NA";

/// Carrier file with AA then PS
pub const CARRIERS: &str = "Code,Description\n\"AA\",American\n\"PS\",PacificSouthwest\n";

/// Airport file with SAN then SFO
pub const AIRPORTS: &str = "\"iata\",\"airport\"\n\"SAN\",\"San Diego\"\n\"SFO\",\"San Francisco\"\n";

/// Aircraft file with a single tail number
pub const PLANE_DATA: &str = "tailnum,type\nN712SW,Corporation\n";

/// Write reference files into a temp dir and return it
pub fn create_reference_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("carriers.csv"), CARRIERS).unwrap();
    fs::write(temp_dir.path().join("airports.csv"), AIRPORTS).unwrap();
    fs::write(temp_dir.path().join("plane-data.csv"), PLANE_DATA).unwrap();
    temp_dir
}

/// Write a data file made of `lines`, newline terminated, and return its path
pub fn write_data_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}
