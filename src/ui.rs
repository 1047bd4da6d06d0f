pub(crate) fn progress(message: &str) {
    eprintln!("==> {message}");
}

pub(crate) fn warning(message: &str) {
    eprintln!("warning: {message}");
}
