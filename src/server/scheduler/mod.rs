pub mod station_conditions;
