pub mod common;

mod app_run;
