#![recursion_limit = "256"]

use anyhow::Context as _;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use ocr_entrypoint::Entrypoint;
use ocr_job_submitter::{
    config::Config, context::Context, handler::handler, model::S3Notification, service,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();
    tracing::info!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!(
        job_definition=%config.job_definition,
        job_queue=%config.job_queue,
        environment=%config.environment,
        "initialized config"
    );

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let batch_client = service::batch::Batch::new(aws_sdk_batch::Client::new(&aws_config));
    tracing::trace!("initialized batch client");

    let ctx = Context::new(s3_client, batch_client, config);

    let func = service_fn(move |event: LambdaEvent<S3Notification>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
