//! Storage bindings: the /dev filesystem and block devices.

use super::module_hooks;

module_hooks! {
    DEVFS / devfs => auto_init_devfs if feature = "devfs";
    SDCARD_SPI / sdcard_spi => auto_init_sdcard_spi
        if all(feature = "auto-init-storage", feature = "sdcard-spi");
}
