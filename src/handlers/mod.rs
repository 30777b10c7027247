mod command_handler;
