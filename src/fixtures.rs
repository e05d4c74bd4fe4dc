//! Small city datasets written to a temporary directory for unit tests.

use std::path::Path;
use tempfile::TempDir;

use crate::filter::City;
use crate::trip::{BIRTH_YEAR_COLUMN, GENDER_COLUMN, TRIP_COLUMNS};

/// Header line without the leading index column.
pub fn header(demographics: bool) -> String {
    let mut columns = TRIP_COLUMNS.to_vec();
    if demographics {
        columns.extend([GENDER_COLUMN, BIRTH_YEAR_COLUMN]);
    }
    columns.join(",")
}

/// Chicago rows; each starts with an index cell.
pub const CHICAGO_ROWS: &str = "\
1423854,2017-01-02 08:15:00,2017-01-02 08:20:00,300,A,B,Subscriber,Male,1985.0
955915,2017-01-02 17:40:00,2017-01-02 17:50:00,600,A,B,Subscriber,Female,1990.0
9031,2017-01-06 08:05:00,2017-01-06 08:12:30,450,C,D,Customer,,
304487,2017-02-14 12:00:00,2017-02-14 12:20:00,1200,C,A,Subscriber,Male,1985.0
45207,2017-03-03 08:30:00,2017-03-03 08:36:00,360,B,D,Subscriber,Male,1972.0
1473887,2017-03-06 18:10:00,2017-03-06 18:22:00,720,A,D,Customer,Female,1998.0
961916,2017-04-15 10:00:00,2017-04-15 10:15:00,900,D,A,Subscriber,Male,1985.0
65924,2017-05-01 08:45:00,2017-05-01 08:49:00,240,A,B,Subscriber,Female,1990.0
606841,2017-05-19 07:55:00,2017-05-19 08:03:30,510,B,C,Customer,,
135470,2017-06-04 14:20:00,2017-06-04 14:45:00,1500,C,D,Subscriber,Male,1964.0
1387315,2017-06-05 08:00:00,2017-06-05 08:05:30,330,A,C,Subscriber,Female,2001.0
702213,2017-06-30 19:30:00,2017-06-30 19:41:00,660,D,B,Dependent,Male,1985.0
";

/// Washington rows; each starts with an index cell.
pub const WASHINGTON_ROWS: &str = "\
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

pub fn write_city(dir: &Path, city: City, contents: &str) {
    std::fs::write(dir.join(city.file_name()), contents).unwrap();
}

/// Chicago and Washington fixtures. New York City has no file.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_city(
        dir.path(),
        City::Chicago,
        &format!(",{}\n{}", header(true), CHICAGO_ROWS),
    );
    write_city(
        dir.path(),
        City::Washington,
        &format!(",{}\n{}", header(false), WASHINGTON_ROWS),
    );
    dir
}
