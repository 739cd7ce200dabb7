// Competitor Radar front end entry point

fn main() {
    radar_web::run();
}
