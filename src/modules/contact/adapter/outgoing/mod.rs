pub mod web3forms_relay;

pub use web3forms_relay::Web3FormsRelay;
