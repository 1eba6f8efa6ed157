mod licenses;
mod measurands;
mod sensors;
mod units;
mod users;
mod values;
