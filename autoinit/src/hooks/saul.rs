//! Sensor and actuator bindings.
//!
//! Everything except `sht1x` is additionally gated on the SAUL registry
//! group flag. `sht1x` initializes whenever the driver is compiled in --
//! shell commands use the driver directly -- and its own hook performs the
//! SAUL registration only when the registry is part of the build.

use super::module_hooks;

module_hooks! {
    /// Unconditional on SAUL by design; do not couple this predicate to
    /// the registry flag.
    SHT1X / sht1x => auto_init_sht1x if feature = "sht1x";
    SAUL_ADC / saul_adc => auto_init_adc
        if all(feature = "auto-init-saul", feature = "saul-adc");
    SAUL_GPIO / saul_gpio => auto_init_gpio
        if all(feature = "auto-init-saul", feature = "saul-gpio");
    SAUL_NRF_TEMPERATURE / saul_nrf_temperature => auto_init_nrf_temperature
        if all(feature = "auto-init-saul", feature = "saul-nrf-temperature");
    AD7746 / ad7746 => auto_init_ad7746
        if all(feature = "auto-init-saul", feature = "ad7746");
    ADCXX1C / adcxx1c => auto_init_adcxx1c
        if all(feature = "auto-init-saul", feature = "adcxx1c");
    ADS101X / ads101x => auto_init_ads101x
        if all(feature = "auto-init-saul", feature = "ads101x");
    ADXL345 / adxl345 => auto_init_adxl345
        if all(feature = "auto-init-saul", feature = "adxl345");
    BMP180 / bmp180 => auto_init_bmp180
        if all(feature = "auto-init-saul", feature = "bmp180");
    BMX280 / bmx280 => auto_init_bmx280
        if all(feature = "auto-init-saul", feature = "bmx280");
    BMX055 / bmx055 => auto_init_bmx055
        if all(feature = "auto-init-saul", feature = "bmx055");
    CCS811 / ccs811 => auto_init_ccs811
        if all(feature = "auto-init-saul", feature = "ccs811");
    DHT / dht => auto_init_dht
        if all(feature = "auto-init-saul", feature = "dht");
    DS18 / ds18 => auto_init_ds18
        if all(feature = "auto-init-saul", feature = "ds18");
    DS75LX / ds75lx => auto_init_ds75lx
        if all(feature = "auto-init-saul", feature = "ds75lx");
    FXOS8700 / fxos8700 => auto_init_fxos8700
        if all(feature = "auto-init-saul", feature = "fxos8700");
    GROVE_LEDBAR / grove_ledbar => auto_init_grove_ledbar
        if all(feature = "auto-init-saul", feature = "grove-ledbar");
    HDC1000 / hdc1000 => auto_init_hdc1000
        if all(feature = "auto-init-saul", feature = "hdc1000");
    HTS221 / hts221 => auto_init_hts221
        if all(feature = "auto-init-saul", feature = "hts221");
    INA2XX / ina2xx => auto_init_ina2xx
        if all(feature = "auto-init-saul", feature = "ina2xx");
    INA3221 / ina3221 => auto_init_ina3221
        if all(feature = "auto-init-saul", feature = "ina3221");
    IO1_XPLAINED / io1_xplained => auto_init_io1_xplained
        if all(feature = "auto-init-saul", feature = "io1-xplained");
    ISL29020 / isl29020 => auto_init_isl29020
        if all(feature = "auto-init-saul", feature = "isl29020");
    ITG320X / itg320x => auto_init_itg320x
        if all(feature = "auto-init-saul", feature = "itg320x");
    JC42 / jc42 => auto_init_jc42
        if all(feature = "auto-init-saul", feature = "jc42");
    L3G4200D / l3g4200d => auto_init_l3g4200d
        if all(feature = "auto-init-saul", feature = "l3g4200d");
    LIS2DH12 / lis2dh12 => auto_init_lis2dh12
        if all(feature = "auto-init-saul", feature = "lis2dh12");
    LIS3DH / lis3dh => auto_init_lis3dh
        if all(feature = "auto-init-saul", feature = "lis3dh");
    LIS3MDL / lis3mdl => auto_init_lis3mdl
        if all(feature = "auto-init-saul", feature = "lis3mdl");
    LPSXXX / lpsxxx => auto_init_lpsxxx
        if all(feature = "auto-init-saul", feature = "lpsxxx");
    LSM303DLHC / lsm303dlhc => auto_init_lsm303dlhc
        if all(feature = "auto-init-saul", feature = "lsm303dlhc");
    LSM6DSL / lsm6dsl => auto_init_lsm6dsl
        if all(feature = "auto-init-saul", feature = "lsm6dsl");
    LTC4150 / ltc4150 => auto_init_ltc4150
        if all(feature = "auto-init-saul", feature = "ltc4150");
    MAG3110 / mag3110 => auto_init_mag3110
        if all(feature = "auto-init-saul", feature = "mag3110");
    MMA7660 / mma7660 => auto_init_mma7660
        if all(feature = "auto-init-saul", feature = "mma7660");
    MMA8X5X / mma8x5x => auto_init_mma8x5x
        if all(feature = "auto-init-saul", feature = "mma8x5x");
    MPL3115A2 / mpl3115a2 => auto_init_mpl3115a2
        if all(feature = "auto-init-saul", feature = "mpl3115a2");
    MPU9X50 / mpu9x50 => auto_init_mpu9x50
        if all(feature = "auto-init-saul", feature = "mpu9x50");
    OPT3001 / opt3001 => auto_init_opt3001
        if all(feature = "auto-init-saul", feature = "opt3001");
    PCA9685 / pca9685 => auto_init_pca9685
        if all(feature = "auto-init-saul", feature = "pca9685");
    PH_OEM / ph_oem => auto_init_ph_oem
        if all(feature = "auto-init-saul", feature = "ph-oem");
    PIR / pir => auto_init_pir
        if all(feature = "auto-init-saul", feature = "pir");
    PULSE_COUNTER / pulse_counter => auto_init_pulse_counter
        if all(feature = "auto-init-saul", feature = "pulse-counter");
    QMC5883L / qmc5883l => auto_init_qmc5883l
        if all(feature = "auto-init-saul", feature = "qmc5883l");
    SHT2X / sht2x => auto_init_sht2x
        if all(feature = "auto-init-saul", feature = "sht2x");
    SHT3X / sht3x => auto_init_sht3x
        if all(feature = "auto-init-saul", feature = "sht3x");
    SHTC1 / shtc1 => auto_init_shtc1
        if all(feature = "auto-init-saul", feature = "shtc1");
    SDS011 / sds011 => auto_init_sds011
        if all(feature = "auto-init-saul", feature = "sds011");
    SI114X / si114x => auto_init_si114x
        if all(feature = "auto-init-saul", feature = "si114x");
    SI70XX / si70xx => auto_init_si70xx
        if all(feature = "auto-init-saul", feature = "si70xx");
    SPS30 / sps30 => auto_init_sps30
        if all(feature = "auto-init-saul", feature = "sps30");
    TCS37727 / tcs37727 => auto_init_tcs37727
        if all(feature = "auto-init-saul", feature = "tcs37727");
    /// The tmp00x driver covers the whole TMP006/TMP007 family.
    TMP006 / tmp006 => auto_init_tmp00x
        if all(feature = "auto-init-saul", feature = "tmp006");
    TSL2561 / tsl2561 => auto_init_tsl2561
        if all(feature = "auto-init-saul", feature = "tsl2561");
    TSL4531X / tsl4531x => auto_init_tsl4531x
        if all(feature = "auto-init-saul", feature = "tsl4531x");
    VCNL40X0 / vcnl40x0 => auto_init_vcnl40x0
        if all(feature = "auto-init-saul", feature = "vcnl40x0");
    VEML6070 / veml6070 => auto_init_veml6070
        if all(feature = "auto-init-saul", feature = "veml6070");
}
