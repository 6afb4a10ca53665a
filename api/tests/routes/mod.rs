mod auth_test;
mod check_ins_test;
mod dashboard_test;
mod guests_test;
mod health_test;
mod workshops_test;
