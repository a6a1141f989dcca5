use dotenv::dotenv;

mod app_context;
mod cli;
mod engine;
mod models;
mod opt;
mod room;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let context = match app_context::create_context() {
        Ok(context) => context,
        Err(err) => {
            println!("Unable to create app context: {}", err);
            return;
        }
    };

    if let Err(err) = room::main(&context).await {
        println!("{}", err);
    }
}
