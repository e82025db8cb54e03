use serde_json::Value;
use std::fs::File;
use std::io::BufReader;

pub fn read_json_file(name: &str) -> Value {
    let file = File::open(format!("tests/data/{}.json", name)).unwrap();
    serde_json::from_reader(BufReader::new(file)).unwrap()
}
