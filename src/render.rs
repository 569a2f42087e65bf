//! HTML Rendering
//!
//! String templates for the pages returned by the calculate endpoint.

use num_bigint::BigUint;

use crate::calc::{Outcome, Resolution};

/// Path of the calculate endpoint, shown in the usage message.
pub const CALCULATE_PATH: &str = "/api/calculate";

const TITLE: &str = "Sum positive ints 1..n";

/// Wraps a body fragment in the full page layout.
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>{TITLE}</title>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <link rel="preconnect" href="https://fonts.gstatic.com">
  <link href="https://fonts.googleapis.com/css2?family=Oswald:wght@300&display=swap" rel="stylesheet">
  <style>
    * {{ font-family: Oswald, sans-serif; }}
    h1 {{ font-size: 200%; }}
  </style>
</head>
<body>
  <h1>{TITLE}</h1>
  {body}
</body>
</html>
"#
    )
}

/// Renders the page for a resolved sum.
pub fn result_page(n: &BigUint, resolution: &Resolution) -> String {
    let record = &resolution.record;
    let body = match resolution.outcome {
        Outcome::Fetched => format!(
            "<h3>Result (fetched entry from db)</h3>
  <p>1..{n} summed is {result}</p>
  <p>Calculation time: {calc} ms.</p>
  <p>Time to fetch from DB: {lookup} ms.</p>",
            result = record.result,
            calc = record.calc_time,
            lookup = resolution.lookup_ms,
        ),
        Outcome::Computed => format!(
            "<h3>Result (new entry in DB)</h3>
  <p>1..{n} summed is {result}</p>
  <p>Calculation time: {calc} ms.</p>
  <p><em>The next time the result is not calculated but grabbed from the database.</em></p>
  <p><button onclick=\"location.reload()\">Click me to grab from db.</button></p>",
            result = record.result,
            calc = record.calc_time,
        ),
    };
    page(&body)
}

/// Renders the usage page returned for an invalid `len` parameter.
///
/// The reason comes from the validator and never echoes raw user input.
pub fn usage_page(reason: &str) -> String {
    page(&format!(
        "<h3>Invalid params...</h3>
  <p>{reason}</p>
  <p>{CALCULATE_PATH}?len=POSITIVE_INT</p>
  <p>Example: {CALCULATE_PATH}?len=199999999</p>"
    ))
}
