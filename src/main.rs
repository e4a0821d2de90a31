use lcd_mandelbrot::ButtonEvent;

fn parse_script(args: &[String]) -> Result<Vec<ButtonEvent>, String> {
    args.iter()
        .map(|arg| match arg.as_str() {
            "i" | "zoom-in" => Ok(ButtonEvent::ZoomIn),
            "o" | "zoom-out" => Ok(ButtonEvent::ZoomOut),
            "l" | "left" => Ok(ButtonEvent::PanLeft),
            "r" | "right" => Ok(ButtonEvent::PanRight),
            other => Err(format!(
                "unknown button '{}', expected one of: i, o, l, r",
                other
            )),
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let script = parse_script(&args)?;

    lcd_mandelbrot::console_viewer_controller(&script)?;

    std::fs::create_dir_all("output")?;
    lcd_mandelbrot::snapshot_controller("output/mandelbrot.pbm")?;

    Ok(())
}
