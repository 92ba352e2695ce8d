/// Run `$body` and log how long it took, labelled with a `format!`-style message
#[macro_export]
macro_rules! timed {
    ($body:expr, $($fmt:tt)+) => {{
        let label = format!($($fmt)+);
        let started = std::time::Instant::now();
        info!("Start: {label}");

        let out = $body;

        info!("End:   {label}: {:?}", started.elapsed());
        out
    }};
}
