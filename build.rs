//! Build script to generate the embedded phrase bank
//!
//! Reads one phrase file per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (input file, generated const, category label)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("data/food.txt", "FOOD", "FOOD"),
    ("data/people.txt", "PEOPLE", "PEOPLE"),
    ("data/places.txt", "PLACES", "PLACES"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("phrases.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated phrase bank").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, label) in CATEGORIES {
        generate_phrase_list(&mut output, input_path, const_name, label);
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "/// Every embedded category with its phrases").unwrap();
    writeln!(output, "pub const CATEGORIES: &[(&str, &[&str])] = &[").unwrap();
    for (_, const_name, label) in CATEGORIES {
        writeln!(output, "    (\"{label}\", {const_name}),").unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_phrase_list(output: &mut fs::File, input_path: &str, const_name: &str, label: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let phrases: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {label} phrases ({} entries)", phrases.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for phrase in phrases {
        writeln!(output, "    {phrase:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
