lazy_static! {
    pub static ref DEBUG_ENABLED: bool = {
        use std::env;
        env::var("CYK_DEBUG").is_ok()
    };
}

macro_rules! log {
    ($($t:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!($($t)*)
        }
    }
}
