//! A [CryptoBox] backed by a `biscotti` [Processor]
use crate::cookie::CryptoBox;
use biscotti::errors::ProcessIncomingError;
use biscotti::{Processor, ResponseCookie};

/// Runs cookie values through the crypto rules a [Processor] holds for one cookie name.
///
/// The rules of [ProcessorConfig](biscotti::ProcessorConfig) are keyed by cookie name,
/// so the box is bound to the name it encrypts for. Names without a rule are
/// percent-encoded when the processor is configured to do so.
/// ```
/// use biscotti::config::{CryptoAlgorithm, CryptoRule};
/// use biscotti::{Key, ProcessorConfig};
/// use crumbs::{Cookie, ProcessorBox};
///
/// let mut config = ProcessorConfig::default();
/// config.crypto_rules.push(CryptoRule {
///     cookie_names: vec!["SID".to_string()],
///     algorithm: CryptoAlgorithm::Encryption,
///     key: Key::generate(),
///     fallbacks: vec![],
/// });
/// let crypto_box = ProcessorBox::new(config.into(), "SID");
///
/// let cookie = Cookie::new("SID", "secret");
/// let encrypted = cookie.encrypt(&crypto_box).unwrap();
/// assert_ne!(encrypted.value(), "secret");
/// assert_eq!(encrypted.decrypt(&crypto_box).unwrap(), cookie);
/// ```
#[derive(Clone)]
pub struct ProcessorBox {
    processor: Processor,
    name: String,
}

impl ProcessorBox {
    pub fn new(processor: Processor, name: impl Into<String>) -> Self {
        ProcessorBox {
            processor,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CryptoBox for ProcessorBox {
    type Error = ProcessIncomingError;

    fn encrypt(&self, plaintext: &str) -> Result<String, Self::Error> {
        let cookie = ResponseCookie::new(self.name.as_str(), plaintext);
        let cookie = self.processor.process_outgoing(cookie);
        Ok(cookie.value().to_owned())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, Self::Error> {
        let cookie = self.processor.process_incoming(&self.name, ciphertext)?;
        Ok(cookie.value().to_owned())
    }
}
