use std::time::Duration;

pub(crate) fn sleep_ms(duration: u64) {
    std::thread::sleep(Duration::from_millis(duration));
}
