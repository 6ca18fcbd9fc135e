//! Late synchronization bindings: handshakes and network clients that
//! expect the rest of the system to be online already.

use super::module_hooks;

module_hooks! {
    /// When an interactive shell is linked in, the shell performs the test
    /// synchronization handshake itself.
    INTERACTIVE_SYNC / interactive_sync => test_utils_interactive_sync
        if all(
            feature = "test-utils-interactive-sync",
            not(all(feature = "shell", feature = "shell-commands"))
        );
    DHCPV6_CLIENT / dhcpv6_client => dhcpv6_client_auto_init
        if feature = "auto-init-dhcpv6-client";
    DHCPV6_CLIENT_6LBR / dhcpv6_client_6lbr => gnrc_dhcpv6_client_6lbr_init
        if feature = "gnrc-dhcpv6-client-6lbr";
}
