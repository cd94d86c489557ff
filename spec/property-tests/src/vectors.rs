//! JSON test vector runner
//!
//! Each vector file pairs one function call with its expected outcome:
//!
//! ```json
//! {
//!   "id": "table_001_basic",
//!   "function": "generate_multiplication_table",
//!   "input": { "n": 3, "limit": 4 },
//!   "expected": { "return": "OK", "value": [3, 6, 9, 12] }
//! }
//! ```
//!
//! `expected.return` is `"OK"` or an error kind (`"InvalidArgument"`), and
//! may be omitted when a `value` is given. An `"OK"` expectation must carry a
//! `value`; an error expectation must not. Any other key fails the vector.

use std::fs;
use std::path::{Path, PathBuf};

use mathfn::MathError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Relative tolerance for float comparison
const FLOAT_TOLERANCE: f64 = 1e-9;

type Result<T> = std::result::Result<T, String>;

// ============================================================================
// Test Vector Structures
// ============================================================================

/// One test vector as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct TestVector {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub function: String,
    #[serde(default)]
    pub description: String,
    pub input: Value,
    pub expected: Value,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Outcome of running one vector
#[derive(Debug, Clone, Serialize)]
pub struct VectorResult {
    pub id: String,
    pub function: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

// ============================================================================
// Loading
// ============================================================================

/// Directory holding the checked-in vectors
pub fn default_vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../test-vectors")
}

/// Parse a single vector file
pub fn load_vector(path: &Path) -> Result<TestVector> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Paths of all `*.json` files in `dir`, sorted by name
pub fn vector_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to list {}: {}", dir.display(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Run every vector in `dir`. Files that fail to load produce a failed result.
pub fn run_dir(dir: &Path) -> Result<Vec<VectorResult>> {
    let results = vector_paths(dir)?
        .iter()
        .map(|path| match load_vector(path) {
            Ok(vector) => run_vector(&vector),
            Err(e) => {
                warn!("{}", e);
                VectorResult {
                    id: path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_string(),
                    function: "load".to_string(),
                    passed: false,
                    error: Some(e),
                    actual: None,
                }
            }
        })
        .collect();
    Ok(results)
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run one vector and compare against its expectation
pub fn run_vector(vector: &TestVector) -> VectorResult {
    debug!(id = %vector.id, function = %vector.function, "running vector");

    let result = validate_expected(&vector.expected).and_then(|()| match vector.function.as_str() {
        "multiply_by_two" => call_multiply_by_two(&vector.input),
        "generate_multiplication_table" => call_generate_multiplication_table(&vector.input),
        "is_prime" => call_is_prime(&vector.input),
        "calculate_average" => call_calculate_average(&vector.input),
        other => Err(format!("No handler for {}", other)),
    });

    match result {
        Ok(actual) => {
            let passed = compare_results(&vector.expected, &actual);
            if !passed {
                warn!(id = %vector.id, %actual, "vector mismatch");
            }
            VectorResult {
                id: vector.id.clone(),
                function: vector.function.clone(),
                passed,
                error: if passed { None } else { Some("Result mismatch".to_string()) },
                actual: if passed { None } else { Some(actual) },
            }
        }
        Err(e) => VectorResult {
            id: vector.id.clone(),
            function: vector.function.clone(),
            passed: false,
            error: Some(e),
            actual: None,
        },
    }
}

fn get_i32(input: &Value, key: &str) -> Result<i32> {
    let raw = input
        .get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| format!("Missing integer {}", key))?;
    i32::try_from(raw).map_err(|_| format!("{} out of i32 range: {}", key, raw))
}

fn outcome<T: Serialize>(result: mathfn::Result<T>) -> Value {
    match result {
        Ok(value) => json!({ "return": "OK", "value": value }),
        Err(e) => error_outcome(e),
    }
}

fn error_outcome(e: MathError) -> Value {
    json!({ "return": e.kind(), "message": e.to_string() })
}

fn call_multiply_by_two(input: &Value) -> Result<Value> {
    let n = get_i32(input, "n")?;
    Ok(outcome(Ok(mathfn::multiply_by_two(n))))
}

fn call_generate_multiplication_table(input: &Value) -> Result<Value> {
    let n = get_i32(input, "n")?;
    let limit = get_i32(input, "limit")?;
    Ok(outcome(mathfn::generate_multiplication_table(n, limit)))
}

fn call_is_prime(input: &Value) -> Result<Value> {
    let n = get_i32(input, "n")?;
    Ok(outcome(Ok(mathfn::is_prime(n))))
}

fn call_calculate_average(input: &Value) -> Result<Value> {
    let numbers = match input.get("numbers") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|v| {
                    v.as_i64()
                        .and_then(|n| i32::try_from(n).ok())
                        .ok_or_else(|| format!("Not an i32: {}", v))
                })
                .collect::<Result<Vec<i32>>>()?,
        ),
        Some(other) => return Err(format!("numbers must be an array or null, got {}", other)),
    };
    Ok(outcome(mathfn::calculate_average_opt(numbers.as_deref())))
}

// ============================================================================
// Comparison
// ============================================================================

/// Reject expectations that would match any outcome.
///
/// `expected` must be an object holding only `return` and `value`. A `"OK"`
/// (or omitted) `return` requires a `value`; an error `return` forbids one.
pub fn validate_expected(expected: &Value) -> Result<()> {
    let map = expected
        .as_object()
        .ok_or_else(|| format!("expected must be an object, got {}", expected))?;

    if let Some(key) = map.keys().find(|k| *k != "return" && *k != "value") {
        return Err(format!("Unrecognised key in expected: {}", key));
    }

    let exp_return = match map.get("return") {
        None => "OK",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(format!("expected.return must be a string, got {}", other)),
    };

    match (exp_return, map.contains_key("value")) {
        ("OK", false) => Err("expected has no value to check".to_string()),
        ("OK", true) => Ok(()),
        (_, true) => Err(format!("expected.return is {} but a value is given", exp_return)),
        (_, false) => Ok(()),
    }
}

/// Check `actual` against a validated `expected`.
pub fn compare_results(expected: &Value, actual: &Value) -> bool {
    let exp_return = expected.get("return").and_then(|v| v.as_str()).unwrap_or("OK");
    let act_return = actual.get("return").and_then(|v| v.as_str()).unwrap_or("OK");
    if exp_return != act_return {
        return false;
    }

    // Error outcomes carry no value
    if exp_return != "OK" {
        return true;
    }

    match (expected.get("value"), actual.get("value")) {
        (Some(exp), Some(act)) => compare_values(exp, act),
        _ => false,
    }
}

fn compare_values(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(exp), Value::Number(act)) => {
            if let (Some(e), Some(a)) = (exp.as_i64(), act.as_i64()) {
                return e == a;
            }
            match (exp.as_f64(), act.as_f64()) {
                (Some(e), Some(a)) => (e - a).abs() <= FLOAT_TOLERANCE * e.abs().max(1.0),
                _ => false,
            }
        }
        (Value::Array(exp), Value::Array(act)) => {
            exp.len() == act.len() && exp.iter().zip(act).all(|(e, a)| compare_values(e, a))
        }
        (exp, act) => exp == act,
    }
}
