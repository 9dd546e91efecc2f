use homebrew_mqtt::network::error::Error;
use homebrew_mqtt::network::*;

/// How many status checks a mock attempt stays pending for.
const MOCK_PENDING_POLLS: u8 = 2;

struct MockAttempt {
    polls_left: u8,
    reachable: bool,
}

impl ConnectHandle for MockAttempt {
    type Error = Error;

    fn status(&mut self) -> Result<ConnectStatus, Self::Error> {
        if self.polls_left > 0 {
            self.polls_left -= 1;
            return Ok(ConnectStatus::Pending);
        }
        if self.reachable {
            Ok(ConnectStatus::Connected)
        } else {
            Ok(ConnectStatus::Failed)
        }
    }
}

struct MockBringUp {
    initialized: bool,
    in_flight: bool,
    reachable: bool,
}

impl MockBringUp {
    fn new(reachable: bool) -> Self {
        Self {
            initialized: false,
            in_flight: false,
            reachable,
        }
    }
}

impl Connectivity for MockBringUp {
    type Error = Error;
    type Handle = MockAttempt;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.initialized = true;
        Ok(())
    }

    fn connect_async(&mut self) -> Result<Self::Handle, Self::Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if self.in_flight {
            return Err(Error::Busy);
        }
        self.in_flight = true;
        Ok(MockAttempt {
            polls_left: MOCK_PENDING_POLLS,
            reachable: self.reachable,
        })
    }
}

#[test]
fn connect_requires_initialization() {
    let mut net = MockBringUp::new(true);
    assert!(matches!(net.connect_async(), Err(Error::NotInitialized)));

    net.initialize().unwrap();
    assert!(net.connect_async().is_ok());
}

#[test]
fn only_one_attempt_in_flight() {
    let mut net = MockBringUp::new(true);
    net.initialize().unwrap();

    let _attempt = net.connect_async().unwrap();
    assert!(matches!(net.connect_async(), Err(Error::Busy)));
}

#[test]
fn attempt_stays_pending_then_connects() {
    let mut net = MockBringUp::new(true);
    net.initialize().unwrap();
    let mut attempt = net.connect_async().unwrap();

    for _ in 0..MOCK_PENDING_POLLS {
        assert_eq!(attempt.status().unwrap(), ConnectStatus::Pending);
    }
    assert_eq!(attempt.status().unwrap(), ConnectStatus::Connected);
}

#[test]
fn unreachable_network_fails_the_attempt() {
    let mut net = MockBringUp::new(false);
    net.initialize().unwrap();
    let mut attempt = net.connect_async().unwrap();

    for _ in 0..MOCK_PENDING_POLLS {
        assert_eq!(attempt.status().unwrap(), ConnectStatus::Pending);
    }
    assert_eq!(attempt.status().unwrap(), ConnectStatus::Failed);
}

#[test]
fn connect_status_serialization() {
    let mut buf = [0u8; 16];
    let len = serde_json_core::to_slice(&ConnectStatus::Pending, &mut buf).unwrap();
    assert_eq!(&buf[..len], b"\"pending\"");

    let (parsed, _) = serde_json_core::from_slice::<ConnectStatus>(b"\"connected\"").unwrap();
    assert_eq!(parsed, ConnectStatus::Connected);
}

#[cfg(feature = "async")]
mod async_tests {
    use super::*;
    use futures::executor::block_on;

    struct AsyncMockBringUp {
        initialized: bool,
        reachable: bool,
    }

    impl AsyncConnectivity for AsyncMockBringUp {
        type Error = Error;

        async fn initialize(&mut self) -> Result<(), Self::Error> {
            self.initialized = true;
            Ok(())
        }

        async fn connect(&mut self) -> Result<(), Self::Error> {
            if !self.initialized {
                return Err(Error::NotInitialized);
            }
            if self.reachable {
                Ok(())
            } else {
                Err(Error::Unavailable)
            }
        }
    }

    #[test]
    fn test_async_bring_up() {
        block_on(async {
            let mut net = AsyncMockBringUp {
                initialized: false,
                reachable: true,
            };
            net.initialize().await.unwrap();
            net.connect().await.unwrap();
        });
    }

    #[test]
    fn test_async_connect_failure() {
        block_on(async {
            let mut net = AsyncMockBringUp {
                initialized: false,
                reachable: false,
            };
            assert_eq!(net.connect().await, Err(Error::NotInitialized));

            net.initialize().await.unwrap();
            assert_eq!(net.connect().await, Err(Error::Unavailable));
        });
    }
}
