use serde::Deserialize;

#[derive(Deserialize)]
pub struct CloudForecast {
    pub data_1h: HourlyData,
}

/// Parallel arrays of the meteoblue "clouds-1h" package, one entry per hour
#[derive(Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub totalcloudcover: Vec<u8>,
}

#[derive(Deserialize)]
pub struct SunMoonForecast {
    pub data_day: DailyData,
}

/// Parallel arrays of the meteoblue "sunmoon" package, one entry per day
#[derive(Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub sunset: Vec<String>,
    pub moonilluminatedfraction: Vec<f64>,
    pub moonphasename: Vec<String>,
}
