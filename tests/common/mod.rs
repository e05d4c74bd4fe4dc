use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

use bikeshare::trip::{BIRTH_YEAR_COLUMN, GENDER_COLUMN, TRIP_COLUMNS};
use bikeshare::{City, Console};

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn console(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

pub fn output(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

pub fn write_city(dir: &Path, city: City, contents: &str) {
    std::fs::write(dir.join(city.file_name()), contents).unwrap();
}

/// New York City data with gender and birth year, twelve trips in June.
pub fn nyc_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let mut csv = format!(
        ",{},{},{}\n",
        TRIP_COLUMNS.join(","),
        GENDER_COLUMN,
        BIRTH_YEAR_COLUMN
    );
    for i in 0..12 {
        let (start, end) = if i % 3 == 0 {
            ("Pershing Square North", "W 41 St & 8 Ave")
        } else {
            ("E 17 St & Broadway", "Broadway & E 22 St")
        };
        csv.push_str(&format!(
            "{},2017-06-{:02} 0{}:10:00,2017-06-{:02} 0{}:30:00,{},{},{},Subscriber,{},{}\n",
            i,
            i + 1,
            i % 10,
            i + 1,
            i % 10,
            100 * (i + 1),
            start,
            end,
            if i % 2 == 0 { "Male" } else { "Female" },
            1980 + i % 4,
        ));
    }
    write_city(dir.path(), City::NewYorkCity, &csv);
    dir
}
