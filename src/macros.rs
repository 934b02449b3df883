// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Call a method on an `Option<&mut dyn Progress>` if there is one:
/// `with_progress!(progress, page_done(page, n, total));`
#[macro_export]
macro_rules! with_progress {
    ($progress:expr, $($call:tt)+) => {
        if let Some(p) = $progress.as_deref_mut() {
            p.$($call)+;
        }
    };
}
