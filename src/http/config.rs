use std::time::Duration;

use crate::config::ClientConfig;

/// Transport level settings for the reqwest client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    pub(crate) timeout: Duration,
    pub(crate) conn_timeout: Duration,
}

impl HttpConfig {
    pub fn new(timeout: Duration, conn_timeout: Duration) -> Self {
        Self {
            timeout,
            conn_timeout,
        }
    }
}

impl From<&ClientConfig> for HttpConfig {
    // The whole request, connection included, must fit in the configured timeout.
    fn from(config: &ClientConfig) -> Self {
        Self::new(config.timeout(), config.timeout())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::HttpConfig;
    use crate::config::{ClientConfig, DEFAULT_TIMEOUT};

    #[test]
    fn http_config_from_client_config() {
        struct TestCase {
            name: &'static str,
            config: ClientConfig,
            expected: HttpConfig,
        }

        impl TestCase {
            fn run(&self) {
                assert_eq!(
                    HttpConfig::from(&self.config),
                    self.expected,
                    "Test name {}",
                    self.name
                )
            }
        }

        let test_cases = [
            TestCase {
                name: "Default timeout",
                config: ClientConfig::default(),
                expected: HttpConfig::new(DEFAULT_TIMEOUT, DEFAULT_TIMEOUT),
            },
            TestCase {
                name: "Custom timeout",
                config: ClientConfig::default().with_timeout(Duration::from_millis(5000)),
                expected: HttpConfig::new(
                    Duration::from_millis(5000),
                    Duration::from_millis(5000),
                ),
            },
        ];

        for test_case in test_cases {
            test_case.run();
        }
    }
}
