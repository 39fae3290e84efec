//! vec2d 演示程序入口
//! 构造两个向量，依次执行全部运算并打印结果

mod config;

use anyhow::Result;
use std::fmt::Display;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

use config::DemoConfig;

/// 打印一行结果；运算失败时记录错误并继续
fn report<T: Display>(label: &str, result: vec2d_core::Result<T>) {
    match result {
        Ok(value) => println!("{label}: {value}"),
        Err(e) => {
            error!("{label} failed: {e}");
            println!("{label}: error: {e}");
        }
    }
}

fn run(config: &DemoConfig) {
    let vect1 = config.first;
    let vect2 = config.second;

    println!("Vector vect1: {vect1}");
    println!("Vector vect2: {vect2}");

    report("vect1 + vect2", vect1.try_add(vect2));
    report("vect1 - vect2", vect1.try_sub(vect2));
    report("vect1 * scalar", vect1.try_scale(config.scalar));
    report("scalar * vect1", config.scalar.try_mul_vector(vect1));
    report("vect1 == vect2", vect1.try_eq(vect2));

    println!("Magnitude of vect1: {}", vect1.mag());
    report("Unit vector of vect1", vect1.unit());
    report("Dot product of vect1 and vect2", vect1.try_dot(vect2));
    report("Angle between vect1 and vect2", vect1.try_angle(vect2));
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(config::log_level_from_env()?)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    info!("Starting vec2d demo...");

    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    debug!(?config, "Loaded configuration");

    run(&config);

    info!("Done");
    Ok(())
}
