// SPDX-License-Identifier: MPL-2.0
//! Built-in weather dataset for trying the builder without typing data.

pub const EXAMPLE_PARAMETERS: &str = "Weather, Temperature, Humidity, Wind, Play";

pub const EXAMPLE_TRAINING_DATA: &str = "\
sunny,hot,high,small,no
sunny,hot,high,big,no
cloudy,hot,high,small,yes
rain,medium,high,small,yes
rain,cold,normal,small,yes
rain,cold,normal,big,no
cloudy,cold,normal,big,yes
sunny,medium,high,small,no
sunny,cold,normal,small,yes
rain,medium,normal,small,yes
sunny,medium,normal,big,yes
cloudy,medium,high,big,yes
cloudy,hot,normal,small,yes
rain,medium,high,big,no";
