use anyhow::Result;
use mariposa::{
    Client, Compositor, HeadlessContext, KeyEvent, KeyState, MotionEvent, SeatCapabilities,
    StubEngine,
};

fn main() -> Result<()> {
    // Initialize logging with standardized format
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,mariposa=debug");
    }
    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S".to_string(),
        ))
        .with_ansi(false)
        .init();

    // Drive one full compositor lifecycle against the stub engine
    let context = HeadlessContext::default();
    let shell = Client::new("/bin/shell", false);
    let mut compositor = Compositor::with_client(&context, Box::new(StubEngine::new()), &shell)?;

    compositor.attach_to_event_loop()?;
    compositor.set_seat_capabilities(
        SeatCapabilities::POINTER | SeatCapabilities::KEYBOARD | SeatCapabilities::TOUCH,
    )?;

    let output = compositor.primary_output()?;
    println!(
        "Headless Mariposa compositor on {}x{} output...",
        output.width(),
        output.height()
    );

    // Short synthetic input burst
    compositor.dispatch_motion(&MotionEvent::mouse_move(100.0, 100.0, 0))?;
    compositor.dispatch_motion(&MotionEvent::touch_down(1, 200.0, 300.0, 5))?;
    compositor.dispatch_motion(&MotionEvent::touch_up(1, 25))?;
    compositor.dispatch_key(&KeyEvent::new(30, KeyState::Pressed, 30))?;
    compositor.dispatch_key(&KeyEvent::new(30, KeyState::Released, 80))?;

    compositor.detach_from_event_loop()?;
    compositor.destroy();

    Ok(())
}
