//! Format layer creation macro

/// Applies the shared display options to a fmt layer and boxes it.
///
/// The time option changes the layer's timer type, so both arms are boxed
/// into the same trait object.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $display:expr, $writer:expr) => {{
        let display = $display;
        let layer = $layer
            .with_writer($writer)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids)
            .with_thread_names(display.thread_names);

        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}
