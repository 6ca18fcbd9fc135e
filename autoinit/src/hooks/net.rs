//! Network transport bindings: packet buffers, IP stacks, transport
//! protocols and the USB device stack (which must precede the USB network
//! interfaces declared in `netdev`).

use super::module_hooks;

module_hooks! {
    GNRC_PKTBUF / gnrc_pktbuf => gnrc_pktbuf_init if feature = "auto-init-gnrc-pktbuf";
    GNRC_PKTDUMP / gnrc_pktdump => gnrc_pktdump_init if feature = "auto-init-gnrc-pktdump";
    GNRC_SIXLOWPAN / gnrc_sixlowpan => gnrc_sixlowpan_init if feature = "auto-init-gnrc-sixlowpan";
    GNRC_IPV6 / gnrc_ipv6 => gnrc_ipv6_init if feature = "auto-init-gnrc-ipv6";
    GNRC_UDP / gnrc_udp => gnrc_udp_init if feature = "auto-init-gnrc-udp";
    GNRC_TCP / gnrc_tcp => gnrc_tcp_init if feature = "auto-init-gnrc-tcp";
    LWIP / lwip => lwip_bootstrap if feature = "auto-init-lwip";
    OPENTHREAD / openthread => openthread_bootstrap if feature = "openthread";
    /// The module can opt out of automatic setup and call `gcoap_init`
    /// itself once its resources exist.
    GCOAP / gcoap => gcoap_init
        if all(feature = "gcoap", not(feature = "gcoap-no-auto-init"));
    GNRC_IPV6_NIB / gnrc_ipv6_nib => gnrc_ipv6_nib_init if feature = "auto-init-gnrc-ipv6-nib";
    SKALD / skald => skald_init if feature = "skald";
    CORD_COMMON / cord_common => cord_common_init if feature = "cord-common";
    CORD_EP_STANDALONE / cord_ep_standalone => cord_ep_standalone_run if feature = "cord-ep-standalone";
    ASYMCUTE / asymcute => asymcute_handler_run if feature = "asymcute";
    NIMBLE / nimble => nimble_init if feature = "nimble";
    LORAMAC / loramac => auto_init_loramac if feature = "auto-init-loramac";
    SOCK_DTLS / sock_dtls => sock_dtls_init if feature = "sock-dtls";
    USBUS / usbus => auto_init_usb if feature = "auto-init-usbus";
}
