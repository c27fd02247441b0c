use liesel::{ingest, router, AppState, Credentials, Result, SensorState};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::StreamExt;
use log::{error, info};
use paho_mqtt as mqtt;
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::{task, time};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    info!("liesel version {VERSION}");

    let user = std::env::var("LIESEL_USER").expect("set ENV variable LIESEL_USER");
    let password = std::env::var("LIESEL_PASSWORD").expect("set ENV variable LIESEL_PASSWORD");

    let http_port: u16 = match std::env::var("HTTP_PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 8080,
    };

    let video_dir = std::env::var("VIDEO_DIR").unwrap_or_else(|_| "/var/video".to_string());
    let video_dir = PathBuf::from(video_dir);
    tokio::fs::create_dir_all(&video_dir).await?;

    let sensor = Arc::new(SensorState::new());

    let state = AppState {
        sensor: sensor.clone(),
        credentials: Arc::new(Credentials { user, password }),
        video_dir: Arc::new(video_dir),
    };

    let web_handle = task::spawn(listen_web(state, http_port));

    if let Ok(mqtt_address) = std::env::var("MQTT_ADDRESS") {
        let topic = std::env::var("SENSOR_TOPIC")
            .unwrap_or_else(|_| "iwasaki/location001/sensor/notify".to_string());

        let mqtt_client = connect_mqtt(mqtt_address).await?;
        info!("connected mqtt");

        let state_handle = task::spawn(subscribe_sensor(mqtt_client, topic, sensor));

        tokio::select! {
            handle = web_handle => handle??,
            handle = state_handle => handle??,
            _ = sigterm() => info!("got SIGTERM, exiting..."),
        }
    } else {
        info!("MQTT_ADDRESS is not set, serving without sensor updates");

        tokio::select! {
            handle = web_handle => handle??,
            _ = sigterm() => info!("got SIGTERM, exiting..."),
        }
    }

    Ok(())
}

async fn sigterm() {
    let mut sig = signal(SignalKind::terminate()).unwrap();
    sig.recv().await;
}

async fn connect_mqtt(address: String) -> Result<mqtt::AsyncClient> {
    let create_opts = mqtt::CreateOptionsBuilder::new_v3()
        .server_uri(address)
        .client_id("liesel")
        .finalize();

    let client = mqtt::AsyncClient::new(create_opts).unwrap_or_else(|err| {
        error!("Error creating the client: {}", err);
        process::exit(1);
    });

    let conn_opts = mqtt::ConnectOptionsBuilder::new_v3()
        .keep_alive_interval(Duration::from_secs(30))
        .clean_session(false)
        .finalize();

    client.connect(conn_opts).await?;

    Ok(client)
}

async fn listen_web(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Listening http://{}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn subscribe_sensor(
    mut mqtt: mqtt::AsyncClient,
    topic: String,
    sensor: Arc<SensorState>,
) -> Result<()> {
    let mut stream = mqtt.get_stream(None);

    mqtt.subscribe(&topic, mqtt::QOS_0);
    info!("Subscribed to topic: {}", topic);

    while let Some(msg_opt) = stream.next().await {
        if let Some(msg) = msg_opt {
            match ingest(msg.payload(), &sensor) {
                Ok(_) => (),
                Err(err) => error!("Error updating reading: {}", err),
            }
        } else {
            error!("Lost MQTT connection. Attempting reconnect.");
            while let Err(err) = mqtt.reconnect().await {
                error!("Error MQTT reconnecting: {}", err);
                time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    Ok(())
}
