//! The production init plan.
//!
//! Declaration order is execution order. Every optional module of the
//! platform has a slot here, in its phase, whether or not the current
//! build enables it; the slot's enabled flag folds to a constant from the
//! build configuration. Editing this table means re-checking the declared
//! order rules -- `InitPlan::verify()` does so in tests and debug boots.

use crate::hooks::{core_services, late_sync, net, netdev, saul, security, storage};
use crate::phase::Phase::*;
use crate::plan::InitPlan;
use crate::slot::{OrderRule, Slot};

/// Pairwise must-not-swap relations carried by this plan, beyond what
/// phase membership already guarantees.
const RULES: &[OrderRule] = &[
    // Both drive the same ESP radio; ESP-NOW claims it first.
    OrderRule::new("esp_now", "esp_wifi"),
];

const SLOTS: &[Slot] = &[
    // -- core services -------------------------------------------------
    Slot::new("random", CoreServices, 10, core_services::random)
        .enabled_if(core_services::RANDOM),
    Slot::new("xtimer", CoreServices, 20, core_services::xtimer)
        .enabled_if(core_services::XTIMER),
    Slot::new("schedstatistics", CoreServices, 30, core_services::schedstatistics)
        .enabled_if(core_services::SCHEDSTATISTICS),
    Slot::new("event_thread", CoreServices, 40, core_services::event_thread)
        .enabled_if(core_services::EVENT_THREAD),
    Slot::new("mci", CoreServices, 50, core_services::mci)
        .enabled_if(core_services::MCI),
    Slot::new("profiling", CoreServices, 60, core_services::profiling)
        .enabled_if(core_services::PROFILING),
    // -- network transport ---------------------------------------------
    Slot::new("gnrc_pktbuf", NetworkTransport, 10, net::gnrc_pktbuf)
        .enabled_if(net::GNRC_PKTBUF),
    Slot::new("gnrc_pktdump", NetworkTransport, 20, net::gnrc_pktdump)
        .enabled_if(net::GNRC_PKTDUMP),
    Slot::new("gnrc_sixlowpan", NetworkTransport, 30, net::gnrc_sixlowpan)
        .enabled_if(net::GNRC_SIXLOWPAN),
    Slot::new("gnrc_ipv6", NetworkTransport, 40, net::gnrc_ipv6)
        .enabled_if(net::GNRC_IPV6),
    Slot::new("gnrc_udp", NetworkTransport, 50, net::gnrc_udp)
        .enabled_if(net::GNRC_UDP),
    Slot::new("gnrc_tcp", NetworkTransport, 60, net::gnrc_tcp)
        .enabled_if(net::GNRC_TCP),
    Slot::new("lwip", NetworkTransport, 70, net::lwip).enabled_if(net::LWIP),
    Slot::new("openthread", NetworkTransport, 80, net::openthread)
        .enabled_if(net::OPENTHREAD),
    Slot::new("gcoap", NetworkTransport, 90, net::gcoap).enabled_if(net::GCOAP),
    Slot::new("gnrc_ipv6_nib", NetworkTransport, 100, net::gnrc_ipv6_nib)
        .enabled_if(net::GNRC_IPV6_NIB),
    Slot::new("skald", NetworkTransport, 110, net::skald).enabled_if(net::SKALD),
    Slot::new("cord_common", NetworkTransport, 120, net::cord_common)
        .enabled_if(net::CORD_COMMON),
    Slot::new("cord_ep_standalone", NetworkTransport, 130, net::cord_ep_standalone)
        .enabled_if(net::CORD_EP_STANDALONE),
    Slot::new("asymcute", NetworkTransport, 140, net::asymcute)
        .enabled_if(net::ASYMCUTE),
    Slot::new("nimble", NetworkTransport, 150, net::nimble).enabled_if(net::NIMBLE),
    Slot::new("loramac", NetworkTransport, 160, net::loramac)
        .enabled_if(net::LORAMAC),
    Slot::new("sock_dtls", NetworkTransport, 170, net::sock_dtls)
        .enabled_if(net::SOCK_DTLS),
    // USB device stack last in transport: the CDC-ECM interface below
    // attaches to it.
    Slot::new("usbus", NetworkTransport, 180, net::usbus).enabled_if(net::USBUS),
    // -- network devices -----------------------------------------------
    Slot::new("stm32_eth", NetworkDevices, 10, netdev::stm32_eth)
        .enabled_if(netdev::STM32_ETH),
    Slot::new("at86rf2xx", NetworkDevices, 20, netdev::at86rf2xx)
        .enabled_if(netdev::AT86RF2XX),
    Slot::new("mrf24j40", NetworkDevices, 30, netdev::mrf24j40)
        .enabled_if(netdev::MRF24J40),
    Slot::new("cc110x", NetworkDevices, 40, netdev::cc110x)
        .enabled_if(netdev::CC110X),
    Slot::new("cc2420", NetworkDevices, 50, netdev::cc2420)
        .enabled_if(netdev::CC2420),
    Slot::new("encx24j600", NetworkDevices, 60, netdev::encx24j600)
        .enabled_if(netdev::ENCX24J600),
    Slot::new("enc28j60", NetworkDevices, 70, netdev::enc28j60)
        .enabled_if(netdev::ENC28J60),
    Slot::new("esp_eth", NetworkDevices, 80, netdev::esp_eth)
        .enabled_if(netdev::ESP_ETH),
    // Don't swap esp_now and esp_wifi; see RULES.
    Slot::new("esp_now", NetworkDevices, 90, netdev::esp_now)
        .enabled_if(netdev::ESP_NOW),
    Slot::new("esp_wifi", NetworkDevices, 100, netdev::esp_wifi)
        .enabled_if(netdev::ESP_WIFI),
    Slot::new("ethos", NetworkDevices, 110, netdev::ethos)
        .enabled_if(netdev::ETHOS),
    Slot::new("dose", NetworkDevices, 120, netdev::dose).enabled_if(netdev::DOSE),
    Slot::new("slipdev", NetworkDevices, 130, netdev::slipdev)
        .enabled_if(netdev::SLIPDEV),
    Slot::new("cc2538_rf", NetworkDevices, 140, netdev::cc2538_rf)
        .enabled_if(netdev::CC2538_RF),
    Slot::new("xbee", NetworkDevices, 150, netdev::xbee).enabled_if(netdev::XBEE),
    Slot::new("kw2xrf", NetworkDevices, 160, netdev::kw2xrf)
        .enabled_if(netdev::KW2XRF),
    Slot::new("usbus_cdc_ecm", NetworkDevices, 170, netdev::usbus_cdc_ecm)
        .enabled_if(netdev::USBUS_CDC_ECM),
    Slot::new("netdev_tap", NetworkDevices, 180, netdev::netdev_tap)
        .enabled_if(netdev::NETDEV_TAP),
    Slot::new("socket_zep", NetworkDevices, 190, netdev::socket_zep)
        .enabled_if(netdev::SOCKET_ZEP),
    Slot::new("nordic_ble", NetworkDevices, 200, netdev::nordic_ble)
        .enabled_if(netdev::NORDIC_BLE),
    Slot::new("nrfmin", NetworkDevices, 210, netdev::nrfmin)
        .enabled_if(netdev::NRFMIN),
    Slot::new("w5100", NetworkDevices, 220, netdev::w5100)
        .enabled_if(netdev::W5100),
    Slot::new("sx127x", NetworkDevices, 230, netdev::sx127x)
        .enabled_if(netdev::SX127X),
    Slot::new("nrf802154", NetworkDevices, 240, netdev::nrf802154)
        .enabled_if(netdev::NRF802154),
    Slot::new("gnrc_uhcpc", NetworkDevices, 250, netdev::gnrc_uhcpc)
        .enabled_if(netdev::GNRC_UHCPC),
    Slot::new("candev", NetworkDevices, 260, netdev::candev)
        .enabled_if(netdev::CANDEV),
    Slot::new("gnrc_rpl", NetworkDevices, 270, netdev::gnrc_rpl)
        .enabled_if(netdev::GNRC_RPL),
    // NDN wants the interfaces above already initialized.
    Slot::new("ndn", NetworkDevices, 280, netdev::ndn).enabled_if(netdev::NDN),
    // -- sensors / actuators -------------------------------------------
    // sht1x initializes regardless of SAUL; only its SAUL registration is
    // conditional, and the hook handles that itself.
    Slot::new("sht1x", SensorsActuators, 10, saul::sht1x).enabled_if(saul::SHT1X),
    Slot::new("saul_adc", SensorsActuators, 20, saul::saul_adc)
        .enabled_if(saul::SAUL_ADC),
    Slot::new("saul_gpio", SensorsActuators, 30, saul::saul_gpio)
        .enabled_if(saul::SAUL_GPIO),
    Slot::new("saul_nrf_temperature", SensorsActuators, 40, saul::saul_nrf_temperature)
        .enabled_if(saul::SAUL_NRF_TEMPERATURE),
    Slot::new("ad7746", SensorsActuators, 50, saul::ad7746)
        .enabled_if(saul::AD7746),
    Slot::new("adcxx1c", SensorsActuators, 60, saul::adcxx1c)
        .enabled_if(saul::ADCXX1C),
    Slot::new("ads101x", SensorsActuators, 70, saul::ads101x)
        .enabled_if(saul::ADS101X),
    Slot::new("adxl345", SensorsActuators, 80, saul::adxl345)
        .enabled_if(saul::ADXL345),
    Slot::new("bmp180", SensorsActuators, 90, saul::bmp180)
        .enabled_if(saul::BMP180),
    Slot::new("bmx280", SensorsActuators, 100, saul::bmx280)
        .enabled_if(saul::BMX280),
    Slot::new("bmx055", SensorsActuators, 110, saul::bmx055)
        .enabled_if(saul::BMX055),
    Slot::new("ccs811", SensorsActuators, 120, saul::ccs811)
        .enabled_if(saul::CCS811),
    Slot::new("dht", SensorsActuators, 130, saul::dht).enabled_if(saul::DHT),
    Slot::new("ds18", SensorsActuators, 140, saul::ds18).enabled_if(saul::DS18),
    Slot::new("ds75lx", SensorsActuators, 150, saul::ds75lx)
        .enabled_if(saul::DS75LX),
    Slot::new("fxos8700", SensorsActuators, 160, saul::fxos8700)
        .enabled_if(saul::FXOS8700),
    Slot::new("grove_ledbar", SensorsActuators, 170, saul::grove_ledbar)
        .enabled_if(saul::GROVE_LEDBAR),
    Slot::new("hdc1000", SensorsActuators, 180, saul::hdc1000)
        .enabled_if(saul::HDC1000),
    Slot::new("hts221", SensorsActuators, 190, saul::hts221)
        .enabled_if(saul::HTS221),
    Slot::new("ina2xx", SensorsActuators, 200, saul::ina2xx)
        .enabled_if(saul::INA2XX),
    Slot::new("ina3221", SensorsActuators, 210, saul::ina3221)
        .enabled_if(saul::INA3221),
    Slot::new("io1_xplained", SensorsActuators, 220, saul::io1_xplained)
        .enabled_if(saul::IO1_XPLAINED),
    Slot::new("isl29020", SensorsActuators, 230, saul::isl29020)
        .enabled_if(saul::ISL29020),
    Slot::new("itg320x", SensorsActuators, 240, saul::itg320x)
        .enabled_if(saul::ITG320X),
    Slot::new("jc42", SensorsActuators, 250, saul::jc42).enabled_if(saul::JC42),
    Slot::new("l3g4200d", SensorsActuators, 260, saul::l3g4200d)
        .enabled_if(saul::L3G4200D),
    Slot::new("lis2dh12", SensorsActuators, 270, saul::lis2dh12)
        .enabled_if(saul::LIS2DH12),
    Slot::new("lis3dh", SensorsActuators, 280, saul::lis3dh)
        .enabled_if(saul::LIS3DH),
    Slot::new("lis3mdl", SensorsActuators, 290, saul::lis3mdl)
        .enabled_if(saul::LIS3MDL),
    Slot::new("lpsxxx", SensorsActuators, 300, saul::lpsxxx)
        .enabled_if(saul::LPSXXX),
    Slot::new("lsm303dlhc", SensorsActuators, 310, saul::lsm303dlhc)
        .enabled_if(saul::LSM303DLHC),
    Slot::new("lsm6dsl", SensorsActuators, 320, saul::lsm6dsl)
        .enabled_if(saul::LSM6DSL),
    Slot::new("ltc4150", SensorsActuators, 330, saul::ltc4150)
        .enabled_if(saul::LTC4150),
    Slot::new("mag3110", SensorsActuators, 340, saul::mag3110)
        .enabled_if(saul::MAG3110),
    Slot::new("mma7660", SensorsActuators, 350, saul::mma7660)
        .enabled_if(saul::MMA7660),
    Slot::new("mma8x5x", SensorsActuators, 360, saul::mma8x5x)
        .enabled_if(saul::MMA8X5X),
    Slot::new("mpl3115a2", SensorsActuators, 370, saul::mpl3115a2)
        .enabled_if(saul::MPL3115A2),
    Slot::new("mpu9x50", SensorsActuators, 380, saul::mpu9x50)
        .enabled_if(saul::MPU9X50),
    Slot::new("opt3001", SensorsActuators, 390, saul::opt3001)
        .enabled_if(saul::OPT3001),
    Slot::new("pca9685", SensorsActuators, 400, saul::pca9685)
        .enabled_if(saul::PCA9685),
    Slot::new("ph_oem", SensorsActuators, 410, saul::ph_oem)
        .enabled_if(saul::PH_OEM),
    Slot::new("pir", SensorsActuators, 420, saul::pir).enabled_if(saul::PIR),
    Slot::new("pulse_counter", SensorsActuators, 430, saul::pulse_counter)
        .enabled_if(saul::PULSE_COUNTER),
    Slot::new("qmc5883l", SensorsActuators, 440, saul::qmc5883l)
        .enabled_if(saul::QMC5883L),
    Slot::new("sht2x", SensorsActuators, 450, saul::sht2x)
        .enabled_if(saul::SHT2X),
    Slot::new("sht3x", SensorsActuators, 460, saul::sht3x)
        .enabled_if(saul::SHT3X),
    Slot::new("shtc1", SensorsActuators, 470, saul::shtc1)
        .enabled_if(saul::SHTC1),
    Slot::new("sds011", SensorsActuators, 480, saul::sds011)
        .enabled_if(saul::SDS011),
    Slot::new("si114x", SensorsActuators, 490, saul::si114x)
        .enabled_if(saul::SI114X),
    Slot::new("si70xx", SensorsActuators, 500, saul::si70xx)
        .enabled_if(saul::SI70XX),
    Slot::new("sps30", SensorsActuators, 510, saul::sps30)
        .enabled_if(saul::SPS30),
    Slot::new("tcs37727", SensorsActuators, 520, saul::tcs37727)
        .enabled_if(saul::TCS37727),
    Slot::new("tmp006", SensorsActuators, 530, saul::tmp006)
        .enabled_if(saul::TMP006),
    Slot::new("tsl2561", SensorsActuators, 540, saul::tsl2561)
        .enabled_if(saul::TSL2561),
    Slot::new("tsl4531x", SensorsActuators, 550, saul::tsl4531x)
        .enabled_if(saul::TSL4531X),
    Slot::new("vcnl40x0", SensorsActuators, 560, saul::vcnl40x0)
        .enabled_if(saul::VCNL40X0),
    Slot::new("veml6070", SensorsActuators, 570, saul::veml6070)
        .enabled_if(saul::VEML6070),
    // -- storage -------------------------------------------------------
    Slot::new("devfs", Storage, 10, storage::devfs).enabled_if(storage::DEVFS),
    Slot::new("sdcard_spi", Storage, 20, storage::sdcard_spi)
        .enabled_if(storage::SDCARD_SPI),
    // -- security ------------------------------------------------------
    Slot::new("suit", Security, 10, security::suit).enabled_if(security::SUIT),
    Slot::new("cryptoauthlib", Security, 20, security::cryptoauthlib)
        .enabled_if(security::CRYPTOAUTHLIB),
    // -- late synchronization ------------------------------------------
    Slot::new("interactive_sync", LateSync, 10, late_sync::interactive_sync)
        .enabled_if(late_sync::INTERACTIVE_SYNC),
    Slot::new("dhcpv6_client", LateSync, 20, late_sync::dhcpv6_client)
        .enabled_if(late_sync::DHCPV6_CLIENT),
    Slot::new("dhcpv6_client_6lbr", LateSync, 30, late_sync::dhcpv6_client_6lbr)
        .enabled_if(late_sync::DHCPV6_CLIENT_6LBR),
];

/// The plan executed by [`crate::auto_init`].
pub static INIT_PLAN: InitPlan = InitPlan::new(SLOTS, RULES);
