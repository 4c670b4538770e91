//! Shared fixtures for lookup table tests

use std::fs;
use std::path::Path;


/// Carrier reference content in the dataset's quoted format
pub const CARRIERS_CSV: &str = "Code,Description\n\
\"02Q\",\"Titan Airways\"\n\
\"AA\",\"American Airlines Inc.\"\n\
\"PS\",\"Pacific Southwest Airlines\"\n";

/// Airport reference content with extra description columns
pub const AIRPORTS_CSV: &str = "\"iata\",\"airport\",\"city\",\"state\",\"country\",\"lat\",\"long\"\n\
\"SAN\",\"San Diego International-Lindbergh \",\"San Diego\",\"CA\",\"USA\",32.73355611,-117.1896567\n\
\"SFO\",\"San Francisco International\",\"San Francisco\",\"CA\",\"USA\",37.61900194,-122.3748433\n";

/// Aircraft reference content: unquoted tail numbers, some without details
pub const PLANE_DATA_CSV: &str = "tailnum,type,manufacturer,issue_date,model,status,aircraft_type,engine_type,year\n\
N050AA\n\
N051AA\n\
N10156,Corporation,EMBRAER,02/13/2004,EMB-145XR,Valid,Fixed Wing Multi-Engine,Turbo-Fan,2004\n";

/// Write the three reference files into `dir`
pub fn write_reference_files(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join("carriers.csv"), CARRIERS_CSV)?;
    fs::write(dir.join("airports.csv"), AIRPORTS_CSV)?;
    fs::write(dir.join("plane-data.csv"), PLANE_DATA_CSV)?;
    Ok(())
}
