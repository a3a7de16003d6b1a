pub mod navigation_controller;
