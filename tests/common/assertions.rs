//! Custom assertion macros

#![allow(unused_macros)]

/// Assert that a JSON array of todos has exactly these ids, in order
macro_rules! assert_todo_ids {
    ($todos:expr, [$($id:expr),* $(,)?]) => {
        let actual: Vec<String> = $todos
            .as_array()
            .expect("expected a JSON array of todos")
            .iter()
            .map(|todo| todo["id"].as_str().unwrap_or_default().to_string())
            .collect();
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected);
    };
}

/// Assert the standard error body: `{"error": ..., "status": ...}`
macro_rules! assert_error_body {
    ($body:expr, $status:expr, $message:expr) => {
        pretty_assertions::assert_eq!($body["status"], $status);
        pretty_assertions::assert_eq!($body["error"], $message);
    };
}
