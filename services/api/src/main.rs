use job_board_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("job board error: {err}");
        std::process::exit(1);
    }
}
