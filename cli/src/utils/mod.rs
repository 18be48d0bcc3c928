pub mod new_window;
