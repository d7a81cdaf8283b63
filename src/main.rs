//! ESP32 entry point: pins, display, WiFi station and the tick task.
//!
//! The perpetual tick loop polls the keypad and mode button, forwards
//! navigation to the UI engine, lets the engine repaint, and sleeps for
//! whatever is left of the per-tick time budget so the WiFi stack gets
//! CPU time between frames.

#![no_std]
#![no_main]

extern crate alloc;

use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_net::{DhcpConfig, Runner, StackResources};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rng::Rng;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use esp_wifi::wifi::{
    ClientConfiguration, Configuration, WifiController, WifiDevice, WifiEvent, WifiState,
};
use esp_wifi::EspWifiController;
use static_cell::StaticCell;

use oledstat::config::NET_REFRESH_MS;
use oledstat::net::NetSnapshot;
use oledstat::ui::buttons::{KeypadPins, ModeButton};
use oledstat::ui::engine::{Frame, Overlay, UiEngine};
use oledstat::ui::frames::{LogoFrame, NetworkFrame};
use oledstat::ui::overlay::StatusOverlay;
use oledstat::ui::{display, InputState};

/// Station credentials, baked in at build time.
const WIFI_SSID: &str = match option_env!("SSID") {
    Some(ssid) => ssid,
    None => "",
};
const WIFI_PASSWORD: &str = match option_env!("PASSWORD") {
    Some(password) => password,
    None => "",
};

const DEVICE_HOSTNAME: &str = "oledstat";

/// How often the connected station re-samples its RSSI (seconds).
const RSSI_REFRESH_SECS: u64 = 30;

type SharedNet = Mutex<CriticalSectionRawMutex, NetSnapshot>;

/// Snapshot shared between the WiFi tasks (writers) and the tick task
/// (reader).
static NET: SharedNet = Mutex::new(NetSnapshot::new());

static WIFI_CTRL: StaticCell<EspWifiController<'static>> = StaticCell::new();
static STACK_RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
    esp_alloc::heap_allocator!(size: 72 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let mut rng = Rng::new(peripherals.RNG);

    let timg1 = TimerGroup::new(peripherals.TIMG1);
    esp_hal_embassy::init(timg1.timer0);

    // Pulse the OLED reset line before talking to the controller.
    let mut oled_reset = Output::new(peripherals.GPIO16, Level::Low, OutputConfig::default());
    Timer::after(Duration::from_millis(50)).await;
    oled_reset.set_high();

    let i2c = match I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(400)),
    ) {
        Ok(i2c) => i2c.with_sda(peripherals.GPIO4).with_scl(peripherals.GPIO15),
        Err(e) => {
            println!("i2c init failed: {:?}", e);
            loop_forever().await
        }
    };

    let mut screen = match display::init(i2c) {
        Ok(screen) => screen,
        Err(e) => {
            println!("display init failed: {:?}", e);
            loop_forever().await
        }
    };
    if let Err(e) = display::draw_boot_screen(&mut screen) {
        println!("boot screen failed: {:?}", e);
    }

    // WiFi bring-up: controller + embassy-net stack with DHCP.
    let wifi_ctrl = WIFI_CTRL.init(match esp_wifi::init(timg0.timer0, rng.clone()) {
        Ok(ctrl) => ctrl,
        Err(e) => {
            println!("wifi init failed: {:?}", e);
            loop_forever().await
        }
    });
    let (controller, interfaces) = match esp_wifi::wifi::new(wifi_ctrl, peripherals.WIFI) {
        Ok(pair) => pair,
        Err(e) => {
            println!("wifi interface failed: {:?}", e);
            loop_forever().await
        }
    };

    let mut dhcp_config = DhcpConfig::default();
    if let Ok(hostname) = heapless::String::try_from(DEVICE_HOSTNAME) {
        dhcp_config.hostname = Some(hostname);
    }
    let net_config = embassy_net::Config::dhcpv4(dhcp_config);
    let seed = (u64::from(rng.random()) << 32) | u64::from(rng.random());
    let (stack, runner) = embassy_net::new(
        interfaces.sta,
        net_config,
        STACK_RESOURCES.init(StackResources::new()),
        seed,
    );

    {
        let mut net = NET.lock().await;
        let _ = net.hostname.push_str(DEVICE_HOSTNAME);
        let _ = net.ssid.push_str(WIFI_SSID);
    }

    spawner.spawn(connection_task(controller, &NET)).ok();
    spawner.spawn(net_task(runner)).ok();
    spawner.spawn(address_task(stack, &NET)).ok();

    // Keypad: active-high with pull-downs; mode button: boot button,
    // active-low with pull-up.
    let pulled_down = InputConfig::default().with_pull(Pull::Down);
    let keypad = KeypadPins {
        up: Input::new(peripherals.GPIO14, pulled_down),
        down: Input::new(peripherals.GPIO26, pulled_down),
        left: Input::new(peripherals.GPIO12, pulled_down),
        right: Input::new(peripherals.GPIO13, pulled_down),
    };
    let mode_button = ModeButton::new(Input::new(
        peripherals.GPIO0,
        InputConfig::default().with_pull(Pull::Up),
    ));

    let logo = LogoFrame;
    let network = NetworkFrame;
    let frames: [&dyn Frame<_>; 2] = [&logo, &network];
    let overlays: [&dyn Overlay<_>; 1] = [&StatusOverlay];
    let mut engine = UiEngine::new(&frames, &overlays);
    let mut input = InputState::new();

    println!("entering tick loop");
    loop {
        input.dispatch(&mut engine, keypad.sample(), mode_button.is_high());

        let net = NET.lock().await.clone();
        let now = Instant::now().as_millis();
        match engine.update(&mut screen, &net, now) {
            Ok(tick) => {
                if tick.rendered {
                    if screen.flush().is_err() {
                        println!("display flush failed");
                    }
                }
                if tick.budget_ms > 0 {
                    Timer::after(Duration::from_millis(tick.budget_ms)).await;
                }
            }
            Err(_) => {
                // Buffered mode cannot fail to draw; keep ticking anyway.
                Timer::after(Duration::from_millis(NET_REFRESH_MS)).await;
            }
        }
    }
}

/// Keep the station associated and its RSSI fresh.
#[embassy_executor::task]
async fn connection_task(mut controller: WifiController<'static>, net: &'static SharedNet) {
    loop {
        if esp_wifi::wifi::wifi_state() == WifiState::StaConnected {
            // Connected: refresh RSSI periodically until the link drops.
            let drop = controller.wait_for_event(WifiEvent::StaDisconnected);
            let refresh = Timer::after(Duration::from_secs(RSSI_REFRESH_SECS));
            match select(drop, refresh).await {
                Either::First(_) => {
                    net.lock().await.rssi_dbm = -100;
                    println!("station disconnected, retrying in 5s");
                    Timer::after(Duration::from_secs(5)).await;
                }
                Either::Second(_) => {
                    refresh_rssi(&mut controller, net).await;
                }
            }
            continue;
        }

        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = Configuration::Client(ClientConfiguration {
                ssid: WIFI_SSID.into(),
                password: WIFI_PASSWORD.into(),
                ..Default::default()
            });
            if let Err(e) = controller.set_configuration(&client_config) {
                println!("wifi configuration failed: {:?}", e);
            }
            if let Err(e) = controller.start_async().await {
                println!("wifi start failed: {:?}", e);
                Timer::after(Duration::from_secs(5)).await;
                continue;
            }
        }

        match controller.connect_async().await {
            Ok(()) => {
                println!("associated with {}", WIFI_SSID);
                refresh_rssi(&mut controller, net).await;
            }
            Err(e) => {
                println!("connect failed: {:?}", e);
                Timer::after(Duration::from_secs(5)).await;
            }
        }
    }
}

/// Scan for the configured AP and record its signal strength.
async fn refresh_rssi(controller: &mut WifiController<'static>, net: &'static SharedNet) {
    match controller.scan_n_async(8).await {
        Ok(access_points) => {
            if let Some(ap) = access_points.iter().find(|ap| ap.ssid == WIFI_SSID) {
                net.lock().await.rssi_dbm = i32::from(ap.signal_strength);
            }
        }
        Err(e) => println!("scan failed: {:?}", e),
    }
}

/// Drive the network stack.
#[embassy_executor::task]
async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await
}

/// Mirror the DHCP-assigned address into the shared snapshot.
#[embassy_executor::task]
async fn address_task(stack: embassy_net::Stack<'static>, net: &'static SharedNet) {
    loop {
        let ip = stack
            .config_v4()
            .map(|config| config.address.address())
            .unwrap_or(core::net::Ipv4Addr::UNSPECIFIED);
        net.lock().await.ip = ip;
        Timer::after(Duration::from_millis(NET_REFRESH_MS)).await;
    }
}

/// Park the task after an unrecoverable bring-up failure; the panel is
/// useless without its display, so there is nothing better to do than
/// leave the log message on the console.
async fn loop_forever() -> ! {
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
