use std::path::Path;

fn main() {
    let rules_path = Path::new("rules/sccmec_rules.json");
    validate_rules_file(rules_path);
    set_build_dependencies();
}

fn validate_rules_file(rules_path: &Path) {
    // Ensure the rule table exists at build time
    assert!(
        rules_path.exists(),
        "\n\nRULES BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the rule table before building.\n",
        rules_path.display()
    );

    let rules_contents = std::fs::read_to_string(rules_path).unwrap_or_else(|e| {
        panic!(
            "\n\nRULES BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            rules_path.display()
        );
    });

    let rules: serde_json::Value = serde_json::from_str(&rules_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nRULES BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            rules_path.display()
        );
    });

    validate_rules_structure(&rules);
}

fn validate_rules_structure(rules: &serde_json::Value) {
    assert!(
        rules.is_object(),
        "\n\nRULES BUILD ERROR: Root must be a JSON object\n\
         Got: {rules}\n"
    );

    let mec = section(rules, "mec_complex");
    let ccr = section(rules, "ccr_complex");
    let sccmec = section(rules, "sccmec_types");

    for (i, rule) in mec.iter().enumerate() {
        let name = rule_name(rule, "mec_complex", i);
        let gene_count = ["required", "any_of"]
            .iter()
            .filter_map(|key| rule.get(*key).and_then(|v| v.as_array()))
            .map(Vec::len)
            .sum::<usize>();
        assert!(
            gene_count > 0,
            "\n\nRULES BUILD ERROR: mec_complex rule '{name}' lists no genes\n"
        );
    }

    for (i, rule) in ccr.iter().enumerate() {
        let name = rule_name(rule, "ccr_complex", i);
        let pattern = rule.get("pattern").and_then(|v| v.as_str()).unwrap_or("");
        assert!(
            !pattern.is_empty(),
            "\n\nRULES BUILD ERROR: ccr_complex rule '{name}' has no 'pattern'\n"
        );
    }

    for (i, rule) in sccmec.iter().enumerate() {
        let name = rule_name(rule, "sccmec_types", i);
        for key in ["mec_complex", "ccr"] {
            assert!(
                rule.get(key).and_then(|v| v.as_str()).is_some(),
                "\n\nRULES BUILD ERROR: sccmec_types rule '{name}' missing '{key}' field\n"
            );
        }
    }

    println!(
        "cargo:warning=Validated rules: {} mec, {} ccr, {} sccmec",
        mec.len(),
        ccr.len(),
        sccmec.len()
    );
}

fn section<'a>(rules: &'a serde_json::Value, key: &str) -> &'a Vec<serde_json::Value> {
    let value = rules.get(key).unwrap_or_else(|| {
        panic!(
            "\n\nRULES BUILD ERROR: Missing '{key}' field\n\
             The rule table must have a top-level '{key}' array.\n"
        );
    });

    value.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nRULES BUILD ERROR: '{key}' must be an array\n\
             Got: {value}\n"
        );
    })
}

fn rule_name<'a>(rule: &'a serde_json::Value, section: &str, index: usize) -> &'a str {
    let name = rule.get("name").and_then(|v| v.as_str()).unwrap_or("");
    assert!(
        !name.is_empty(),
        "\n\nRULES BUILD ERROR: {section} rule at index {index} missing 'name' field\n"
    );
    name
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the rule table changes
    println!("cargo:rerun-if-changed=rules/sccmec_rules.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
