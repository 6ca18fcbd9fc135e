//! Network interface bindings, all additionally gated on the netif group
//! flag, plus the helpers that require the interfaces to be up.

use super::module_hooks;

module_hooks! {
    STM32_ETH / stm32_eth => auto_init_stm32_eth
        if all(feature = "auto-init-gnrc-netif", feature = "stm32-eth");
    AT86RF2XX / at86rf2xx => auto_init_at86rf2xx
        if all(feature = "auto-init-gnrc-netif", feature = "auto-init-at86rf2xx");
    MRF24J40 / mrf24j40 => auto_init_mrf24j40
        if all(feature = "auto-init-gnrc-netif", feature = "mrf24j40");
    CC110X / cc110x => auto_init_cc110x
        if all(feature = "auto-init-gnrc-netif", feature = "cc110x");
    CC2420 / cc2420 => auto_init_cc2420
        if all(feature = "auto-init-gnrc-netif", feature = "cc2420");
    ENCX24J600 / encx24j600 => auto_init_encx24j600
        if all(feature = "auto-init-gnrc-netif", feature = "encx24j600");
    ENC28J60 / enc28j60 => auto_init_enc28j60
        if all(feature = "auto-init-gnrc-netif", feature = "enc28j60");
    ESP_ETH / esp_eth => auto_init_esp_eth
        if all(feature = "auto-init-gnrc-netif", feature = "esp-eth");
    /// Must run before the ESP WiFi bring-up: both drive the same radio
    /// and ESP-NOW claims it first. Declared as an order rule in the plan.
    ESP_NOW / esp_now => auto_init_esp_now
        if all(feature = "auto-init-gnrc-netif", feature = "esp-now");
    /// Keep after `esp_now`; see the order rule.
    ESP_WIFI / esp_wifi => auto_init_esp_wifi
        if all(feature = "auto-init-gnrc-netif", feature = "esp-wifi");
    ETHOS / ethos => auto_init_ethos
        if all(feature = "auto-init-gnrc-netif", feature = "ethos");
    DOSE / dose => auto_init_dose
        if all(feature = "auto-init-gnrc-netif", feature = "dose");
    SLIPDEV / slipdev => auto_init_slipdev
        if all(feature = "auto-init-gnrc-netif", feature = "slipdev");
    CC2538_RF / cc2538_rf => auto_init_cc2538_rf
        if all(feature = "auto-init-gnrc-netif", feature = "cc2538-rf");
    XBEE / xbee => auto_init_xbee
        if all(feature = "auto-init-gnrc-netif", feature = "xbee");
    KW2XRF / kw2xrf => auto_init_kw2xrf
        if all(feature = "auto-init-gnrc-netif", feature = "kw2xrf");
    USBUS_CDC_ECM / usbus_cdc_ecm => auto_init_netdev_cdcecm
        if all(feature = "auto-init-gnrc-netif", feature = "usbus-cdc-ecm");
    NETDEV_TAP / netdev_tap => auto_init_netdev_tap
        if all(feature = "auto-init-gnrc-netif", feature = "netdev-tap");
    SOCKET_ZEP / socket_zep => auto_init_socket_zep
        if all(feature = "auto-init-gnrc-netif", feature = "socket-zep");
    NORDIC_BLE / nordic_ble => gnrc_nordic_ble_init
        if all(feature = "auto-init-gnrc-netif", feature = "nordic-softdevice-ble");
    NRFMIN / nrfmin => gnrc_nrfmin_init
        if all(feature = "auto-init-gnrc-netif", feature = "nrfmin");
    W5100 / w5100 => auto_init_w5100
        if all(feature = "auto-init-gnrc-netif", feature = "w5100");
    /// The LoRaMAC package drives the sx127x radio itself; the bare
    /// interface is only set up when the package is absent.
    SX127X / sx127x => auto_init_sx127x
        if all(
            feature = "auto-init-gnrc-netif",
            feature = "sx127x",
            not(feature = "semtech-loramac")
        );
    NRF802154 / nrf802154 => auto_init_nrf802154
        if all(feature = "auto-init-gnrc-netif", feature = "nrf802154");
    GNRC_UHCPC / gnrc_uhcpc => auto_init_gnrc_uhcpc if feature = "auto-init-gnrc-uhcpc";
    CANDEV / candev => auto_init_candev if feature = "auto-init-can";
    GNRC_RPL / gnrc_rpl => auto_init_gnrc_rpl if feature = "auto-init-gnrc-rpl";
    /// Needs the network devices initialized, hence the phase-tail slot.
    NDN / ndn => ndn_init if feature = "ndn";
}
