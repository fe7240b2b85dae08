use crate::enums::language::Language;

/// Built-in snippets offered by the `sample` command and `analyze --sample`.
pub fn sample_for(language: Language) -> Option<&'static str> {
    match language {
        Language::Python => Some(PYTHON_SAMPLE),
        Language::JavaScript => Some(JAVASCRIPT_SAMPLE),
        Language::Java => Some(JAVA_SAMPLE),
        Language::Cpp => Some(CPP_SAMPLE),
        Language::TypeScript => Some(TYPESCRIPT_SAMPLE),
        Language::Go => Some(GO_SAMPLE),
        Language::Rust => Some(RUST_SAMPLE),
        Language::Unknown => None,
    }
}

const PYTHON_SAMPLE: &str = r#"def process_data(data):
    result = []
    for item in data:
        if item > 0:
            result.append(item * 2)
    return result

# SQL query example (vulnerability)
def get_user(user_input):
    query = "SELECT * FROM users WHERE name = '" + user_input + "'"
    return execute_query(query)"#;

const JAVASCRIPT_SAMPLE: &str = r#"function calculateTotal(items) {
    let total = 0;
    for (let i = 0; i < items.length; i++) {
        total += items[i].price;
    }
    return total;
}

// Potential XSS vulnerability
function displayMessage(message) {
    document.getElementById('output').innerHTML = message;
}"#;

const JAVA_SAMPLE: &str = r#"public class DataProcessor {
    public List<Integer> processData(List<Integer> data) {
        List<Integer> result = new ArrayList<>();
        for (Integer item : data) {
            if (item > 0) {
                result.add(item * 2);
            }
        }
        return result;
    }
}"#;

const CPP_SAMPLE: &str = r#"#include <vector>
#include <iostream>

class DataProcessor {
public:
    std::vector<int> processData(const std::vector<int>& data) {
        std::vector<int> result;
        for (int item : data) {
            if (item > 0) {
                result.push_back(item * 2);
            }
        }
        return result;
    }
};"#;

const TYPESCRIPT_SAMPLE: &str = r#"interface Item {
    price: number;
    name: string;
}

function calculateTotal(items: Item[]): number {
    let total: number = 0;
    for (let i = 0; i < items.length; i++) {
        total += items[i].price;
    }
    return total;
}"#;

const GO_SAMPLE: &str = r#"package main

import "fmt"

func processData(data []int) []int {
    var result []int
    for _, item := range data {
        if item > 0 {
            result = append(result, item*2)
        }
    }
    return result
}"#;

const RUST_SAMPLE: &str = r#"fn process_data(data: Vec<i32>) -> Vec<i32> {
    let mut result = Vec::new();
    for item in data {
        if item > 0 {
            result.push(item * 2);
        }
    }
    result
}"#;
