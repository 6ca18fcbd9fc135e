//! Security bindings: software-update conditions and secure elements.

use super::module_hooks;

module_hooks! {
    SUIT / suit => suit_init_conditions if feature = "suit";
    CRYPTOAUTHLIB / cryptoauthlib => auto_init_atca
        if all(feature = "auto-init-security", feature = "cryptoauthlib");
}
