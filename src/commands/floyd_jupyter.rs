use anyhow::{Context, Result};
use ff::floyd::{self, JupyterLaunch};
use ff::SystemRunner;

pub fn execute(gpu: bool) -> Result<()> {
    let launch = JupyterLaunch::with_gpu(gpu);

    floyd::start_jupyter(&SystemRunner, &launch).context("Failed to start Jupyter on FloydHub")
}
