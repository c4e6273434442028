/*
[INPUT]:  Account identifier and shared secret key
[OUTPUT]: Request signatures embedded in the XML envelope
[POS]:    Auth layer - handles MTI API request authentication
[UPDATE]: When the signature scheme or credential handling changes
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::RequestSigner;
