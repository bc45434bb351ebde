use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    component: Option<String>,
}

impl Logger {
    fn write(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.component {
            Some(component) => println!("[{}][{}] {}", timestamp, component, message),
            None => println!("[{}] {}", timestamp, message),
        }
    }
}

/// First call wins; later calls keep the original component tag.
pub fn init_logger(component: Option<String>) {
    LOGGER.get_or_init(|| Logger { component });
}

/// Messages logged before `init_logger` still come out, untagged.
pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.write(message),
        None => println!("{}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
