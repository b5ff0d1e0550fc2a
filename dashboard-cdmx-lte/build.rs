use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy data fixtures to OUT_DIR for include_str. When a fixture is
    // missing (fresh checkout without data drops) fall back to a tiny sample
    // so the app still builds and renders something.
    let copies = [
        (
            "../fixtures/data_forecast_mvp.csv",
            "data_forecast_mvp.csv",
            "ds,municipio,operator,variable,type,y,yhat_upper,yhat_lower\n\
             2024-01-01,Cuauhtémoc,AT&T,m_download_mbps,historical,12.5,,\n\
             2024-02-01,Cuauhtémoc,AT&T,m_download_mbps,forecast,13.0,14.0,12.0\n",
        ),
        (
            "../fixtures/h3_median_data_cdmx.csv",
            "h3_median_data_cdmx.csv",
            "h3_08,municipio,operator,variable,median\n",
        ),
        (
            "../fixtures/h3_cdmx.geojson",
            "h3_cdmx.geojson",
            "{\"type\": \"FeatureCollection\", \"features\": []}\n",
        ),
    ];

    for (src, name, fallback) in &copies {
        let src_path = Path::new(src);
        let dest = Path::new(&out_dir).join(name);
        if src_path.exists() {
            fs::copy(src_path, &dest).unwrap();
        } else {
            fs::write(&dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed={}", src);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
